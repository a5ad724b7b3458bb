use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Course difficulty band shown on the course cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// One trackable course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub duration_weeks: u8,
    pub level: CourseLevel,
    pub topics: BTreeSet<String>,
}

/// Progress of one account through one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEnrollment {
    pub course_id: String,
    pub account_id: String,
    pub percent_complete: u8,
}

/// Course joined with the viewer's progress, for the student dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct CourseProgressView {
    pub course: Course,
    pub percent_complete: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    Technical,
    Behavioral,
    SystemDesign,
}

impl InterviewMode {
    pub const fn label(self) -> &'static str {
        match self {
            InterviewMode::Technical => "technical",
            InterviewMode::Behavioral => "behavioral",
            InterviewMode::SystemDesign => "system_design",
        }
    }
}

/// A bookable mock-interview slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSlot {
    pub id: String,
    pub topic: String,
    pub interviewer: String,
    pub mode: InterviewMode,
    pub scheduled_at: DateTime<Utc>,
}

/// Candidate row surfaced to employers and aggregated for colleges. The
/// readiness score is seeded data, not a model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub headline: String,
    pub skills: BTreeSet<String>,
    pub readiness_score: u8,
    pub placed: bool,
}

impl CandidateProfile {
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(skill))
    }
}
