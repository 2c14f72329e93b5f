use std::path::PathBuf;

use anyhow::Context;

use crate::scoring::DEFAULT_TOP_N;

pub const DEFAULT_RESULTS_PATH: &str = "user_results.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub catalog_path: Option<PathBuf>,
    pub results_path: PathBuf,
    pub top_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let top_n = match lookup("CAREER_MATCH_TOP_N") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("CAREER_MATCH_TOP_N must be a whole number, got {raw:?}"))?,
            None => defaults.top_n,
        };

        Ok(Self {
            catalog_path: lookup("CAREER_MATCH_CATALOG").map(PathBuf::from),
            results_path: lookup("CAREER_MATCH_RESULTS")
                .map(PathBuf::from)
                .unwrap_or(defaults.results_path),
            top_n,
        })
    }
}
