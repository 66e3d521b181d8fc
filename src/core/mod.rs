pub mod codec;
pub mod engine;
pub mod export;
pub mod extract;
pub mod normalize;
pub mod profile;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod vocabulary;

pub use crate::domain::model::{Analysis, CandidateProfile, JobRequirements, MatchResult};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
pub use engine::ResumeScreener;
pub use vocabulary::Vocabulary;
