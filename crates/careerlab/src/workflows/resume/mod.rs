//! Resume builder: the working document and its in-place editor operations,
//! the simulated upload pipeline, and the simulated ATS analysis.

pub mod analysis;
pub mod domain;
pub mod editor;
pub mod router;
pub mod service;
pub mod upload;

pub use analysis::{AtsAnalyzer, AtsReport};
pub use domain::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
pub use editor::{EditError, EditOperation};
pub use router::resume_router;
pub use service::{ResumeError, ResumeRepository, ResumeService, ResumeStoreError};
pub use upload::{
    validate_file_name, UploadError, UploadStatusView, UploadTracker, ACCEPTED_EXTENSIONS,
};
