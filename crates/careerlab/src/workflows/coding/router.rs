use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::catalog::{CatalogFilter, DifficultyFilter, TagFilter};
use super::domain::{ChallengeId, Language};
use super::service::{CodingError, CodingLabService};
use crate::runtime::RandomSource;

/// Router builder exposing the coding lab endpoints.
pub fn coding_router<S>(service: Arc<CodingLabService<S>>) -> Router
where
    S: RandomSource + Send + 'static,
{
    Router::new()
        .route("/api/v1/coding/challenges", get(list_handler::<S>))
        .route("/api/v1/coding/challenges/:id", get(detail_handler::<S>))
        .route("/api/v1/coding/challenges/:id/run", post(run_handler::<S>))
        .route(
            "/api/v1/coding/challenges/:id/submit",
            post(submit_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChallengeQuery {
    pub(crate) difficulty: Option<String>,
    pub(crate) tag: Option<String>,
}

/// The editor payload travels with run/submit for fidelity with the client,
/// but the simulation never reads the code.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AttemptRequest {
    #[serde(default)]
    pub(crate) language: Option<Language>,
    #[serde(default)]
    pub(crate) code: Option<String>,
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<CodingLabService<S>>>,
    Query(query): Query<ChallengeQuery>,
) -> Response
where
    S: RandomSource + Send + 'static,
{
    let Some(difficulty) = DifficultyFilter::parse(query.difficulty.as_deref()) else {
        let payload = json!({
            "error": format!(
                "unknown difficulty '{}'",
                query.difficulty.unwrap_or_default()
            ),
        });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let filter = CatalogFilter {
        difficulty,
        tag: TagFilter::parse(query.tag.as_deref()),
    };

    let challenges = service.challenges(&filter);
    (StatusCode::OK, axum::Json(challenges)).into_response()
}

pub(crate) async fn detail_handler<S>(
    State(service): State<Arc<CodingLabService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RandomSource + Send + 'static,
{
    match service.challenge(&ChallengeId(id)) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn run_handler<S>(
    State(service): State<Arc<CodingLabService<S>>>,
    Path(id): Path<String>,
    axum::Json(attempt): axum::Json<AttemptRequest>,
) -> Response
where
    S: RandomSource + Send + 'static,
{
    log_attempt("run", &attempt);
    match service.run(&ChallengeId(id)) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<CodingLabService<S>>>,
    Path(id): Path<String>,
    axum::Json(attempt): axum::Json<AttemptRequest>,
) -> Response
where
    S: RandomSource + Send + 'static,
{
    log_attempt("submit", &attempt);
    match service.submit(&ChallengeId(id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => not_found(error),
    }
}

fn log_attempt(action: &str, attempt: &AttemptRequest) {
    debug!(
        action,
        language = attempt.language.map(Language::label),
        code_len = attempt.code.as_deref().map(str::len),
        "coding lab attempt"
    );
}

fn not_found(error: CodingError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
