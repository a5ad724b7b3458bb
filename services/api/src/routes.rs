use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use careerlab::directory::{
    dashboard_router, DashboardService, SeededCandidateStore, SeededCourseStore,
    SeededInterviewStore,
};
use careerlab::navigation::AppRoute;
use careerlab::runtime::{SeededRandom, SystemClock};
use careerlab::workflows::coding::{coding_router, CodingLabService};
use careerlab::workflows::registration::{registration_router, RegistrationService};
use careerlab::workflows::resume::{resume_router, ResumeService};

use crate::infra::{
    AppState, InMemoryNoticeBoard, InMemoryRegistrationRepository, InMemoryResumeRepository,
};

pub(crate) type Registration =
    RegistrationService<InMemoryRegistrationRepository, InMemoryNoticeBoard>;
pub(crate) type CodingLab = CodingLabService<SeededRandom>;
pub(crate) type Resume = ResumeService<InMemoryResumeRepository, SystemClock, SeededRandom>;
pub(crate) type Dashboards =
    DashboardService<SeededCourseStore, SeededInterviewStore, SeededCandidateStore>;

/// Compose every workflow router with the operational endpoints.
pub(crate) fn api_router(
    registration: Arc<Registration>,
    coding: Arc<CodingLab>,
    resume: Arc<Resume>,
    dashboards: Arc<Dashboards>,
) -> axum::Router {
    registration_router(registration)
        .merge(coding_router(coding))
        .merge(resume_router(resume))
        .merge(dashboard_router(dashboards))
        .route("/api/v1/routes", axum::routing::get(route_table_endpoint))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

const PAGE_ROUTES: [AppRoute; 13] = [
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
    AppRoute::NotFound,
];

/// The shell's page route table, enumerated for clients that render
/// navigation from the server.
pub(crate) async fn route_table_endpoint() -> Json<serde_json::Value> {
    let routes: Vec<serde_json::Value> = PAGE_ROUTES
        .iter()
        .map(|route| json!({ "route": route, "path": route.path() }))
        .collect();
    Json(json!({ "routes": routes }))
}
