use crate::session::Role;
use serde::Serialize;

/// The platform's route table, enumerated literally. The shell router owns
/// rendering; services only ever hand these back as redirect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    Landing,
    Login,
    Register,
    Dashboard,
    StudentDashboard,
    CollegeDashboard,
    EmployerDashboard,
    MockInterviews,
    ResumeBuilder,
    CodingLabs,
    Assignments,
    Courses,
    NotFound,
}

impl AppRoute {
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Landing => "/",
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::StudentDashboard => "/student-dashboard",
            AppRoute::CollegeDashboard => "/college-dashboard",
            AppRoute::EmployerDashboard => "/employer-dashboard",
            AppRoute::MockInterviews => "/mock-interviews",
            AppRoute::ResumeBuilder => "/resume-builder",
            AppRoute::CodingLabs => "/coding-labs",
            AppRoute::Assignments => "/assignments",
            AppRoute::Courses => "/courses",
            AppRoute::NotFound => "*",
        }
    }

    /// Unknown paths fall through to the catch-all route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => AppRoute::Landing,
            "/login" => AppRoute::Login,
            "/register" => AppRoute::Register,
            "/dashboard" => AppRoute::Dashboard,
            "/student-dashboard" => AppRoute::StudentDashboard,
            "/college-dashboard" => AppRoute::CollegeDashboard,
            "/employer-dashboard" => AppRoute::EmployerDashboard,
            "/mock-interviews" => AppRoute::MockInterviews,
            "/resume-builder" => AppRoute::ResumeBuilder,
            "/coding-labs" => AppRoute::CodingLabs,
            "/assignments" => AppRoute::Assignments,
            "/courses" => AppRoute::Courses,
            _ => AppRoute::NotFound,
        }
    }

    /// Post-registration and post-login redirect target. Sessions without a
    /// role land on the generic dashboard.
    pub const fn dashboard_for(role: Option<Role>) -> Self {
        match role {
            Some(Role::Student) => AppRoute::StudentDashboard,
            Some(Role::College) => AppRoute::CollegeDashboard,
            Some(Role::Employer) => AppRoute::EmployerDashboard,
            None => AppRoute::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_the_table() {
        for route in [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::StudentDashboard,
            AppRoute::CollegeDashboard,
            AppRoute::EmployerDashboard,
            AppRoute::MockInterviews,
            AppRoute::ResumeBuilder,
            AppRoute::CodingLabs,
            AppRoute::Assignments,
            AppRoute::Courses,
        ] {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_hit_the_catch_all() {
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn redirects_follow_the_selected_role() {
        assert_eq!(
            AppRoute::dashboard_for(Some(Role::Student)),
            AppRoute::StudentDashboard
        );
        assert_eq!(
            AppRoute::dashboard_for(Some(Role::Employer)),
            AppRoute::EmployerDashboard
        );
        assert_eq!(AppRoute::dashboard_for(None), AppRoute::Dashboard);
    }
}
