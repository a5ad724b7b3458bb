//! Coding lab: the immutable challenge catalog, the shared-buffer editor
//! workspace, and the simulated run/submit evaluator.

pub mod catalog;
pub mod domain;
pub mod evaluation;
pub mod router;
pub mod service;
pub mod workspace;

pub use catalog::{CatalogFilter, ChallengeCatalog, DifficultyFilter, TagFilter};
pub use domain::{
    Challenge, ChallengeDetail, ChallengeId, ChallengeSummary, Difficulty, Language, RunOutcome,
    SubmissionResult, SubmissionStatus, TestCase,
};
pub use evaluation::SubmissionEvaluator;
pub use router::coding_router;
pub use service::{CodingError, CodingLabService};
pub use workspace::CodingWorkspace;
