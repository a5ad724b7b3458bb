//! Consolidated in-memory stores for the platform's shared entities
//! (courses, interview slots, candidates) and the role dashboards assembled
//! from them. One store per entity type, injected where needed.

pub mod dashboard;
pub mod domain;
pub mod repository;
pub mod router;
pub mod seed;

pub use dashboard::{
    CollegeDashboard, DashboardError, DashboardService, DashboardView, EmployerDashboard,
    StudentDashboard,
};
pub use domain::{
    CandidateProfile, Course, CourseEnrollment, CourseLevel, CourseProgressView, InterviewMode,
    InterviewSlot,
};
pub use repository::{CandidateStore, CourseStore, InterviewStore};
pub use router::dashboard_router;
pub use seed::{SeededCandidateStore, SeededCourseStore, SeededInterviewStore};
