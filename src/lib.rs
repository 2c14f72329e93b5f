//! Ranks a catalog of career archetypes against a self-assessed profile.
//!
//! The scorer in [`scoring`] is a pure function of profile and catalog;
//! [`intake`], [`results`] and [`report`] serve the calling layer.

pub mod catalog;
pub mod config;
pub mod intake;
pub mod logging;
pub mod models;
pub mod report;
pub mod results;
pub mod scoring;

pub use catalog::{Catalog, CatalogError};
pub use models::{Answer, CareerRequirement, Orientation, ScoreBreakdown, ScoredCareer, UserProfile};
pub use scoring::{recommend, score, DEFAULT_TOP_N};
