pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ScreenerConfig;

pub use crate::core::{ResumeScreener, Vocabulary};
pub use domain::model::{
    Analysis, CandidateProfile, EducationLevel, JobRequirements, MatchResult, PersistedRecord,
    RecommendationTier, ScoreBreakdown,
};
pub use utils::error::{Result, ScreenerError};
