use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::dashboard::{DashboardError, DashboardService};
use super::repository::{CandidateStore, CourseStore, InterviewStore};
use crate::session::{Role, Session};

/// Router builder exposing the role dashboards.
pub fn dashboard_router<Co, Iv, Ca>(service: Arc<DashboardService<Co, Iv, Ca>>) -> Router
where
    Co: CourseStore + 'static,
    Iv: InterviewStore + 'static,
    Ca: CandidateStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/dashboards/:role",
            get(dashboard_handler::<Co, Iv, Ca>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DashboardQuery {
    pub(crate) skill: Option<String>,
}

pub(crate) async fn dashboard_handler<Co, Iv, Ca>(
    State(service): State<Arc<DashboardService<Co, Iv, Ca>>>,
    Path(role): Path<String>,
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
) -> Response
where
    Co: CourseStore + 'static,
    Iv: InterviewStore + 'static,
    Ca: CandidateStore + 'static,
{
    let Some(requested) = Role::parse(&role) else {
        let payload = json!({ "error": format!("unknown dashboard '{role}'") });
        return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
    };

    let session = Session::from_headers(&headers);
    match service.view(&session, requested, Utc::now(), query.skill.as_deref()) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error @ DashboardError::Unauthenticated { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "redirect": error.redirect().path(),
            });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        Err(error @ DashboardError::RoleMismatch { .. }) => {
            let payload = json!({
                "error": error.to_string(),
                "redirect": error.redirect().path(),
            });
            (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
        }
    }
}
