use chrono::{DateTime, Utc};

use super::domain::{CandidateProfile, Course, CourseEnrollment, InterviewSlot};

/// Read seams over the per-entity stores. Each entity type gets exactly one
/// store; pages never carry their own private copies of this data.
pub trait CourseStore: Send + Sync {
    fn all(&self) -> Vec<Course>;
    fn enrollments_for(&self, account_id: &str) -> Vec<CourseEnrollment>;
}

pub trait InterviewStore: Send + Sync {
    /// Slots at or after the given instant, soonest first.
    fn upcoming(&self, after: DateTime<Utc>) -> Vec<InterviewSlot>;
}

pub trait CandidateStore: Send + Sync {
    fn all(&self) -> Vec<CandidateProfile>;

    fn with_skill(&self, skill: &str) -> Vec<CandidateProfile> {
        self.all()
            .into_iter()
            .filter(|candidate| candidate.has_skill(skill))
            .collect()
    }
}
