//! Turns raw form answers into validated profiles.
//!
//! The scorer trusts its inputs, so every range check and text clean-up
//! happens here before a `UserProfile` exists.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Answer, Orientation, UserProfile};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("{field} must be one of {expected}, got {value:?}")]
    InvalidChoice {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("participant name is required")]
    MissingName,
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read csv {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub participant: Participant,
    pub profile: UserProfile,
}

/// One unvalidated form submission, as found in a JSON profile file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileInput {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub tenth: i64,
    pub twelfth: i64,
    pub ug: i64,
    pub logical: i64,
    pub coding: i64,
    pub public_speaking: i64,
    pub hours_per_day: i64,
    pub mgt_or_tech: String,
    pub self_learning: String,
    pub extra_courses: String,
    pub hackathons: String,
    #[serde(default)]
    pub workshops: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

/// CSV shape of a submission: list columns hold `;`-separated text and are
/// read as plain strings whatever they look like.
#[derive(Debug, Deserialize)]
struct CsvProfileRow {
    name: String,
    email: Option<String>,
    tenth: i64,
    twelfth: i64,
    ug: i64,
    logical: i64,
    coding: i64,
    public_speaking: i64,
    hours_per_day: i64,
    mgt_or_tech: String,
    self_learning: String,
    extra_courses: String,
    hackathons: String,
    workshops: Option<String>,
    certifications: Option<String>,
}

impl From<CsvProfileRow> for ProfileInput {
    fn from(row: CsvProfileRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            tenth: row.tenth,
            twelfth: row.twelfth,
            ug: row.ug,
            logical: row.logical,
            coding: row.coding,
            public_speaking: row.public_speaking,
            hours_per_day: row.hours_per_day,
            mgt_or_tech: row.mgt_or_tech,
            self_learning: row.self_learning,
            extra_courses: row.extra_courses,
            hackathons: row.hackathons,
            workshops: split_delimited(row.workshops),
            certifications: split_delimited(row.certifications),
        }
    }
}

impl ProfileInput {
    pub fn into_assessment(self) -> Result<Assessment, ProfileError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }
        let email = self
            .email
            .map(|email| email.trim().to_string())
            .filter(|email| !email.is_empty());

        let profile = UserProfile {
            tenth: ranged("tenth", self.tenth, 100)?,
            twelfth: ranged("twelfth", self.twelfth, 100)?,
            ug: ranged("ug", self.ug, 100)?,
            logical: ranged("logical", self.logical, 10)?,
            coding: ranged("coding", self.coding, 10)?,
            public_speaking: ranged("public_speaking", self.public_speaking, 10)?,
            hours_per_day: ranged("hours_per_day", self.hours_per_day, 12)?,
            mgt_or_tech: parse_orientation(&self.mgt_or_tech)?,
            self_learning: parse_answer("self_learning", &self.self_learning)?,
            extra_courses: parse_answer("extra_courses", &self.extra_courses)?,
            hackathons: parse_answer("hackathons", &self.hackathons)?,
            workshops: clean_entries(self.workshops),
            certifications: clean_entries(self.certifications),
        };

        Ok(Assessment {
            participant: Participant { name, email },
            profile,
        })
    }
}

pub fn load_json(path: &Path) -> Result<Assessment, ProfileError> {
    let shown = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: shown.clone(),
        source,
    })?;
    let input: ProfileInput = serde_json::from_str(&raw).map_err(|source| ProfileError::Json {
        path: shown,
        source,
    })?;
    input.into_assessment()
}

/// Reads every row of a profile CSV. Rows that fail to parse or validate
/// come back as errors in place so one bad row does not sink the batch.
pub fn load_csv(path: &Path) -> Result<Vec<Result<Assessment, ProfileError>>, ProfileError> {
    let shown = path.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| ProfileError::Csv {
            path: shown.clone(),
            source,
        })?;

    let rows = reader
        .deserialize::<CsvProfileRow>()
        .map(|row| {
            row.map_err(|source| ProfileError::Csv {
                path: shown.clone(),
                source,
            })
            .and_then(|row| ProfileInput::from(row).into_assessment())
        })
        .collect();

    Ok(rows)
}

fn ranged(field: &'static str, value: i64, max: i64) -> Result<u32, ProfileError> {
    if !(0..=max).contains(&value) {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            min: 0,
            max,
        });
    }
    Ok(value as u32)
}

fn parse_orientation(raw: &str) -> Result<Orientation, ProfileError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("technical") {
        Ok(Orientation::Technical)
    } else if value.eq_ignore_ascii_case("management") {
        Ok(Orientation::Management)
    } else {
        Err(ProfileError::InvalidChoice {
            field: "mgt_or_tech",
            value: raw.to_string(),
            expected: "Technical, Management",
        })
    }
}

fn parse_answer(field: &'static str, raw: &str) -> Result<Answer, ProfileError> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("yes") {
        Ok(Answer::Yes)
    } else if value.eq_ignore_ascii_case("no") {
        Ok(Answer::No)
    } else {
        Err(ProfileError::InvalidChoice {
            field,
            value: raw.to_string(),
            expected: "Yes, No",
        })
    }
}

fn clean_entries(entries: Vec<String>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn split_delimited(cell: Option<String>) -> Vec<String> {
    cell.map(|text| text.split(';').map(str::to_string).collect())
        .unwrap_or_default()
}
