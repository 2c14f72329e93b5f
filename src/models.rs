use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Technical,
    Management,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Technical => "Technical",
            Orientation::Management => "Management",
        }
    }

    /// Technical pairs with tech-oriented careers, Management with the rest.
    pub fn matches(&self, tech_oriented: bool) -> bool {
        matches!(
            (self, tech_oriented),
            (Orientation::Technical, true) | (Orientation::Management, false)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(&self) -> bool {
        matches!(self, Answer::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

/// One assessment's self-reported attributes.
///
/// Ranges are a caller precondition: percentages 0-100, skill ratings 0-10,
/// `hours_per_day` 0-12. The scorer does not clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
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
    #[serde(default)]
    pub workshops: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

impl UserProfile {
    pub fn academic_average(&self) -> f64 {
        (self.tenth as f64 + self.twelfth as f64 + self.ug as f64) / 3.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRequirement {
    pub name: String,
    #[serde(default)]
    pub min_coding: u32,
    #[serde(default)]
    pub min_logical: u32,
    #[serde(default)]
    pub min_academic: u32,
    #[serde(default)]
    pub tech_oriented: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub growth_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub career_name: String,
    pub score: f64,
}

/// Per-term contributions to a fit score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub academic: f64,
    pub coding: f64,
    pub logical: f64,
    pub orientation: f64,
    pub keywords: f64,
    pub work_ethic: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.academic + self.coding + self.logical + self.orientation + self.keywords + self.work_ethic
    }
}
