use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{CandidateProfile, CourseProgressView, InterviewSlot};
use super::repository::{CandidateStore, CourseStore, InterviewStore};
use crate::navigation::AppRoute;
use crate::session::{Role, Session};
use crate::workflows::coding::{ChallengeCatalog, ChallengeSummary};

const INTERVIEW_PREVIEW_LIMIT: usize = 3;
const TOP_SKILL_LIMIT: usize = 5;

/// Student landing view: tracked courses, upcoming interviews, and a slice
/// of the challenge catalog to practice next.
#[derive(Debug, Clone, Serialize)]
pub struct StudentDashboard {
    pub enrolled: Vec<CourseProgressView>,
    pub upcoming_interviews: Vec<InterviewSlot>,
    pub recommended_challenges: Vec<ChallengeSummary>,
}

/// College landing view: placement aggregates over the candidate pool.
#[derive(Debug, Clone, Serialize)]
pub struct CollegeDashboard {
    pub student_count: usize,
    pub placed_count: usize,
    pub average_readiness: u8,
    pub top_skills: Vec<String>,
}

/// Employer landing view: the candidate pool, optionally narrowed by skill.
#[derive(Debug, Clone, Serialize)]
pub struct EmployerDashboard {
    pub candidates: Vec<CandidateProfile>,
    pub skill_filter: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardView {
    Student(StudentDashboard),
    College(CollegeDashboard),
    Employer(EmployerDashboard),
}

/// Access failures carry the route the caller should land on instead.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("sign in to view dashboards")]
    Unauthenticated { redirect: AppRoute },
    #[error("the {requested} dashboard belongs to another role")]
    RoleMismatch {
        requested: &'static str,
        redirect: AppRoute,
    },
}

impl DashboardError {
    pub fn redirect(&self) -> AppRoute {
        match self {
            DashboardError::Unauthenticated { redirect } => *redirect,
            DashboardError::RoleMismatch { redirect, .. } => *redirect,
        }
    }
}

/// Assembles role dashboards from the injected stores. Every view is built
/// per request; nothing is cached or owned by a page.
pub struct DashboardService<Co, Iv, Ca> {
    courses: Arc<Co>,
    interviews: Arc<Iv>,
    candidates: Arc<Ca>,
    catalog: Arc<ChallengeCatalog>,
}

impl<Co, Iv, Ca> DashboardService<Co, Iv, Ca>
where
    Co: CourseStore + 'static,
    Iv: InterviewStore + 'static,
    Ca: CandidateStore + 'static,
{
    pub fn new(
        courses: Arc<Co>,
        interviews: Arc<Iv>,
        candidates: Arc<Ca>,
        catalog: Arc<ChallengeCatalog>,
    ) -> Self {
        Self {
            courses,
            interviews,
            candidates,
            catalog,
        }
    }

    /// Build the dashboard for `requested`, gated on the session. A signed-in
    /// caller asking for another role's dashboard is pointed at their own.
    pub fn view(
        &self,
        session: &Session,
        requested: Role,
        now: DateTime<Utc>,
        skill_filter: Option<&str>,
    ) -> Result<DashboardView, DashboardError> {
        let account = session
            .account()
            .ok_or(DashboardError::Unauthenticated {
                redirect: AppRoute::Login,
            })?;

        if account.role != requested {
            return Err(DashboardError::RoleMismatch {
                requested: requested.label(),
                redirect: AppRoute::dashboard_for(Some(account.role)),
            });
        }

        Ok(match requested {
            Role::Student => DashboardView::Student(self.student(&account.id, now)),
            Role::College => DashboardView::College(self.college()),
            Role::Employer => DashboardView::Employer(self.employer(skill_filter)),
        })
    }

    fn student(&self, account_id: &str, now: DateTime<Utc>) -> StudentDashboard {
        let courses = self.courses.all();
        let enrolled = self
            .courses
            .enrollments_for(account_id)
            .into_iter()
            .filter_map(|enrollment| {
                courses
                    .iter()
                    .find(|course| course.id == enrollment.course_id)
                    .map(|course| CourseProgressView {
                        course: course.clone(),
                        percent_complete: enrollment.percent_complete,
                    })
            })
            .collect();

        let mut upcoming_interviews = self.interviews.upcoming(now);
        upcoming_interviews.truncate(INTERVIEW_PREVIEW_LIMIT);

        // Most-attempted challenges first; the catalog is small enough to
        // sort per request.
        let mut recommended: Vec<&_> = self.catalog.entries().iter().collect();
        recommended.sort_by(|a, b| b.submissions.cmp(&a.submissions));
        let recommended_challenges = recommended
            .into_iter()
            .take(3)
            .map(ChallengeSummary::from)
            .collect();

        StudentDashboard {
            enrolled,
            upcoming_interviews,
            recommended_challenges,
        }
    }

    fn college(&self) -> CollegeDashboard {
        let candidates = self.candidates.all();
        let student_count = candidates.len();
        let placed_count = candidates.iter().filter(|c| c.placed).count();
        let average_readiness = if candidates.is_empty() {
            0
        } else {
            let total: u32 = candidates
                .iter()
                .map(|c| c.readiness_score as u32)
                .sum();
            (total / candidates.len() as u32) as u8
        };

        let mut frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for candidate in &candidates {
            for skill in &candidate.skills {
                *frequency.entry(skill.as_str()).or_default() += 1;
            }
        }
        let mut ranked: Vec<(&str, usize)> = frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        let top_skills = ranked
            .into_iter()
            .take(TOP_SKILL_LIMIT)
            .map(|(skill, _)| skill.to_string())
            .collect();

        CollegeDashboard {
            student_count,
            placed_count,
            average_readiness,
            top_skills,
        }
    }

    fn employer(&self, skill_filter: Option<&str>) -> EmployerDashboard {
        let mut candidates = match skill_filter {
            Some(skill) => self.candidates.with_skill(skill),
            None => self.candidates.all(),
        };
        candidates.sort_by(|a, b| b.readiness_score.cmp(&a.readiness_score));

        EmployerDashboard {
            candidates,
            skill_filter: skill_filter.map(str::to_string),
        }
    }
}
