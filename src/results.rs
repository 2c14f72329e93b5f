use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::intake::Participant;
use crate::models::{Answer, Orientation, ScoredCareer, UserProfile};

#[derive(Debug, Error)]
pub enum ResultLogError {
    #[error("result log {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("result log {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One logged assessment: who took it, what they answered and how the
/// careers ranked. List answers are stored `;`-joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub assessment_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub tenth: u32,
    pub twelfth: u32,
    pub ug: u32,
    pub logical: u32,
    pub coding: u32,
    pub public_speaking: u32,
    pub hours_per_day: u32,
    pub mgt_or_tech: Orientation,
    pub self_learning: Answer,
    pub extra_courses: Answer,
    pub hackathons: Answer,
    pub workshops: String,
    pub certifications: String,
    pub top_career: String,
    pub top_score: f64,
    pub ranking: String,
}

impl ResultEntry {
    pub fn new(
        participant: &Participant,
        profile: &UserProfile,
        ranked: &[ScoredCareer],
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let (top_career, top_score) = ranked
            .first()
            .map(|top| (top.career_name.clone(), round2(top.score)))
            .unwrap_or_default();

        let ranking = ranked
            .iter()
            .map(|scored| format!("{}:{:.2}", scored.career_name, scored.score))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            assessment_id: Uuid::new_v4(),
            recorded_at,
            name: participant.name.clone(),
            email: participant.email.clone().unwrap_or_default(),
            tenth: profile.tenth,
            twelfth: profile.twelfth,
            ug: profile.ug,
            logical: profile.logical,
            coding: profile.coding,
            public_speaking: profile.public_speaking,
            hours_per_day: profile.hours_per_day,
            mgt_or_tech: profile.mgt_or_tech,
            self_learning: profile.self_learning,
            extra_courses: profile.extra_courses,
            hackathons: profile.hackathons,
            workshops: profile.workshops.join(";"),
            certifications: profile.certifications.join(";"),
            top_career,
            top_score,
            ranking,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    Inserted,
    Updated,
}

pub fn read_all(path: &Path) -> Result<Vec<ResultEntry>, ResultLogError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::Reader::from_path(path).map_err(|source| csv_error(path, source))?;
    reader
        .deserialize::<ResultEntry>()
        .map(|row| row.map_err(|source| csv_error(path, source)))
        .collect()
}

/// Writes `entry` into the log, replacing any earlier row for the same
/// participant name.
pub fn record(path: &Path, entry: ResultEntry) -> Result<Recorded, ResultLogError> {
    let outcomes = record_all(path, vec![entry])?;
    Ok(outcomes[0])
}

/// Upserts every entry by participant name in a single read and write.
/// The log is replaced atomically, so a failed write leaves the old file.
pub fn record_all(
    path: &Path,
    incoming: Vec<ResultEntry>,
) -> Result<Vec<Recorded>, ResultLogError> {
    let mut entries = read_all(path)?;
    let mut outcomes = Vec::with_capacity(incoming.len());

    for entry in incoming {
        match entries.iter_mut().find(|existing| existing.name == entry.name) {
            Some(existing) => {
                *existing = entry;
                outcomes.push(Recorded::Updated);
            }
            None => {
                entries.push(entry);
                outcomes.push(Recorded::Inserted);
            }
        }
    }

    write_atomically(path, &entries)?;
    tracing::info!(path = %path.display(), rows = entries.len(), upserts = outcomes.len(), "result log written");
    Ok(outcomes)
}

fn write_atomically(path: &Path, entries: &[ResultEntry]) -> Result<(), ResultLogError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staging = tempfile::NamedTempFile::new_in(dir).map_err(|source| io_error(path, source))?;

    {
        let mut writer = csv::Writer::from_writer(staging.as_file_mut());
        for row in entries {
            writer.serialize(row).map_err(|source| csv_error(path, source))?;
        }
        writer.flush().map_err(|source| io_error(path, source))?;
    }

    staging
        .persist(path)
        .map_err(|err| io_error(path, err.error))?;
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> ResultLogError {
    ResultLogError::Csv {
        path: path.display().to_string(),
        source,
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ResultLogError {
    ResultLogError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
