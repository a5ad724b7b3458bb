use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::ResumeDocument;
use super::editor::EditOperation;
use super::service::{ResumeError, ResumeRepository, ResumeService};
use super::upload::UploadError;
use crate::runtime::{Clock, RandomSource};

/// Router builder exposing the resume builder endpoints.
pub fn resume_router<R, C, S>(service: Arc<ResumeService<R, C, S>>) -> Router
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    Router::new()
        .route("/api/v1/resume/uploads", post(begin_upload_handler::<R, C, S>))
        .route(
            "/api/v1/resume/uploads/:upload_id",
            get(upload_status_handler::<R, C, S>).delete(cancel_upload_handler::<R, C, S>),
        )
        .route(
            "/api/v1/resume/:owner",
            get(document_handler::<R, C, S>).put(replace_handler::<R, C, S>),
        )
        .route("/api/v1/resume/:owner/edits", post(edit_handler::<R, C, S>))
        .route(
            "/api/v1/resume/:owner/analysis",
            post(analyze_handler::<R, C, S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BeginUploadRequest {
    pub(crate) file_name: String,
}

pub(crate) async fn document_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.document(&owner) {
        Ok(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn replace_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(owner): Path<String>,
    axum::Json(document): axum::Json<ResumeDocument>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.replace(&owner, document) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn edit_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(owner): Path<String>,
    axum::Json(operation): axum::Json<EditOperation>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.edit(&owner, operation) {
        Ok(document) => (StatusCode::OK, axum::Json(document)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(owner): Path<String>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.analyze(&owner) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn begin_upload_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    axum::Json(request): axum::Json<BeginUploadRequest>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.begin_upload(&request.file_name) {
        Ok(view) => (StatusCode::ACCEPTED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn upload_status_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(upload_id): Path<String>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.upload_status(&upload_id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn cancel_upload_handler<R, C, S>(
    State(service): State<Arc<ResumeService<R, C, S>>>,
    Path(upload_id): Path<String>,
) -> Response
where
    R: ResumeRepository + 'static,
    C: Clock + 'static,
    S: RandomSource + Send + 'static,
{
    match service.cancel_upload(&upload_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ResumeError) -> Response {
    let status = match &error {
        ResumeError::Edit(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ResumeError::Upload(UploadError::NotFound(_)) => StatusCode::NOT_FOUND,
        ResumeError::Upload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ResumeError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
