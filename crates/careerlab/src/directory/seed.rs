use std::collections::BTreeSet;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

use super::domain::{
    CandidateProfile, Course, CourseEnrollment, CourseLevel, InterviewMode, InterviewSlot,
};
use super::repository::{CandidateStore, CourseStore, InterviewStore};

fn topic_set(topics: &[&str]) -> BTreeSet<String> {
    topics.iter().map(|topic| topic.to_string()).collect()
}

/// The stock course catalog.
pub fn standard_courses() -> Vec<Course> {
    vec![
        Course {
            id: "dsa-fundamentals".to_string(),
            title: "Data Structures & Algorithms Fundamentals".to_string(),
            provider: "CareerLab Academy".to_string(),
            duration_weeks: 8,
            level: CourseLevel::Beginner,
            topics: topic_set(&["arrays", "hash-map", "recursion"]),
        },
        Course {
            id: "system-design-primer".to_string(),
            title: "System Design Primer".to_string(),
            provider: "CareerLab Academy".to_string(),
            duration_weeks: 6,
            level: CourseLevel::Intermediate,
            topics: topic_set(&["scalability", "caching", "queues"]),
        },
        Course {
            id: "dp-masterclass".to_string(),
            title: "Dynamic Programming Masterclass".to_string(),
            provider: "Northstar Prep".to_string(),
            duration_weeks: 4,
            level: CourseLevel::Advanced,
            topics: topic_set(&["dynamic-programming", "memoization"]),
        },
        Course {
            id: "interview-communication".to_string(),
            title: "Communicating in Technical Interviews".to_string(),
            provider: "Northstar Prep".to_string(),
            duration_weeks: 2,
            level: CourseLevel::Beginner,
            topics: topic_set(&["behavioral", "whiteboarding"]),
        },
    ]
}

/// Stock enrollments; progress percentages are seed data.
pub fn standard_enrollments() -> Vec<CourseEnrollment> {
    vec![
        CourseEnrollment {
            course_id: "dsa-fundamentals".to_string(),
            account_id: "acct-000001".to_string(),
            percent_complete: 65,
        },
        CourseEnrollment {
            course_id: "system-design-primer".to_string(),
            account_id: "acct-000001".to_string(),
            percent_complete: 20,
        },
        CourseEnrollment {
            course_id: "dsa-fundamentals".to_string(),
            account_id: "acct-000002".to_string(),
            percent_complete: 100,
        },
    ]
}

/// Mock-interview slots laid out relative to an anchor so demos and tests
/// control where "now" falls.
pub fn standard_interviews(anchor: DateTime<Utc>) -> Vec<InterviewSlot> {
    vec![
        InterviewSlot {
            id: "slot-arrays-01".to_string(),
            topic: "Arrays & Strings Deep Dive".to_string(),
            interviewer: "Dana Whitfield".to_string(),
            mode: InterviewMode::Technical,
            scheduled_at: anchor + Duration::days(1),
        },
        InterviewSlot {
            id: "slot-behavioral-01".to_string(),
            topic: "Behavioral Round Practice".to_string(),
            interviewer: "Marcus Okafor".to_string(),
            mode: InterviewMode::Behavioral,
            scheduled_at: anchor + Duration::days(2),
        },
        InterviewSlot {
            id: "slot-sysdesign-01".to_string(),
            topic: "Design a URL Shortener".to_string(),
            interviewer: "Ingrid Svensson".to_string(),
            mode: InterviewMode::SystemDesign,
            scheduled_at: anchor + Duration::days(4),
        },
        InterviewSlot {
            id: "slot-arrays-00".to_string(),
            topic: "Warmup: Two Pointers".to_string(),
            interviewer: "Dana Whitfield".to_string(),
            mode: InterviewMode::Technical,
            scheduled_at: anchor - Duration::days(3),
        },
    ]
}

fn skill_set(skills: &[&str]) -> BTreeSet<String> {
    skills.iter().map(|skill| skill.to_string()).collect()
}

/// Stock candidate pool shared by the employer and college dashboards.
pub fn standard_candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: "cand-0001".to_string(),
            name: "Asha Nair".to_string(),
            headline: "Backend-leaning generalist, strong in Python".to_string(),
            skills: skill_set(&["Python", "SQL", "Django"]),
            readiness_score: 86,
            placed: false,
        },
        CandidateProfile {
            id: "cand-0002".to_string(),
            name: "Jordan Reyes".to_string(),
            headline: "Systems enthusiast, comfortable in C++".to_string(),
            skills: skill_set(&["C++", "Linux", "Git"]),
            readiness_score: 78,
            placed: true,
        },
        CandidateProfile {
            id: "cand-0003".to_string(),
            name: "Mei-Lin Chou".to_string(),
            headline: "Frontend specialist with TypeScript depth".to_string(),
            skills: skill_set(&["TypeScript", "React", "CSS"]),
            readiness_score: 91,
            placed: false,
        },
        CandidateProfile {
            id: "cand-0004".to_string(),
            name: "Tomás Ferreira".to_string(),
            headline: "Data-focused, at home in SQL and Python".to_string(),
            skills: skill_set(&["Python", "SQL", "Pandas"]),
            readiness_score: 69,
            placed: false,
        },
    ]
}

/// In-memory course store seeded with the stock catalog. Enrollments can be
/// added at runtime; the catalog itself stays fixed.
pub struct SeededCourseStore {
    courses: Vec<Course>,
    enrollments: Mutex<Vec<CourseEnrollment>>,
}

impl SeededCourseStore {
    pub fn standard() -> Self {
        Self {
            courses: standard_courses(),
            enrollments: Mutex::new(standard_enrollments()),
        }
    }

    pub fn enroll(&self, enrollment: CourseEnrollment) {
        let mut guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        guard.push(enrollment);
    }
}

impl CourseStore for SeededCourseStore {
    fn all(&self) -> Vec<Course> {
        self.courses.clone()
    }

    fn enrollments_for(&self, account_id: &str) -> Vec<CourseEnrollment> {
        let guard = self.enrollments.lock().expect("enrollment mutex poisoned");
        guard
            .iter()
            .filter(|enrollment| enrollment.account_id == account_id)
            .cloned()
            .collect()
    }
}

/// In-memory interview store seeded around an anchor instant.
pub struct SeededInterviewStore {
    slots: Vec<InterviewSlot>,
}

impl SeededInterviewStore {
    pub fn standard(anchor: DateTime<Utc>) -> Self {
        Self {
            slots: standard_interviews(anchor),
        }
    }
}

impl InterviewStore for SeededInterviewStore {
    fn upcoming(&self, after: DateTime<Utc>) -> Vec<InterviewSlot> {
        let mut slots: Vec<InterviewSlot> = self
            .slots
            .iter()
            .filter(|slot| slot.scheduled_at >= after)
            .cloned()
            .collect();
        slots.sort_by_key(|slot| slot.scheduled_at);
        slots
    }
}

/// In-memory candidate store seeded with the stock pool.
pub struct SeededCandidateStore {
    candidates: Vec<CandidateProfile>,
}

impl SeededCandidateStore {
    pub fn standard() -> Self {
        Self {
            candidates: standard_candidates(),
        }
    }
}

impl CandidateStore for SeededCandidateStore {
    fn all(&self) -> Vec<CandidateProfile> {
        self.candidates.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn upcoming_slots_exclude_the_past_and_sort_soonest_first() {
        let anchor = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();
        let store = SeededInterviewStore::standard(anchor);

        let upcoming = store.upcoming(anchor);
        assert_eq!(upcoming.len(), 3);
        assert!(upcoming.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));
        assert!(upcoming.iter().all(|slot| slot.scheduled_at >= anchor));
    }

    #[test]
    fn enrollments_are_scoped_to_the_account() {
        let store = SeededCourseStore::standard();
        let mine = store.enrollments_for("acct-000001");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|e| e.account_id == "acct-000001"));

        store.enroll(CourseEnrollment {
            course_id: "dp-masterclass".to_string(),
            account_id: "acct-000001".to_string(),
            percent_complete: 0,
        });
        assert_eq!(store.enrollments_for("acct-000001").len(), 3);
        assert_eq!(store.enrollments_for("acct-000002").len(), 1);
    }

    #[test]
    fn skill_filter_is_case_insensitive() {
        let store = SeededCandidateStore::standard();
        let pythonistas = store.with_skill("python");
        assert_eq!(pythonistas.len(), 2);
    }
}
