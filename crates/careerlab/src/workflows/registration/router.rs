use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::FormRecord;
use super::repository::{RegistrationRepository, RepositoryError};
use super::service::{RegistrationError, RegistrationService};
use super::validation::ValidationReport;
use super::wizard::WizardStep;
use crate::notify::Notifier;
use crate::session::Role;

/// Router builder exposing HTTP endpoints for the registration wizard.
pub fn registration_router<R, N>(service: Arc<RegistrationService<R, N>>) -> Router
where
    R: RegistrationRepository + 'static,
    N: Notifier + 'static,
{
    Router::new()
        .route("/api/v1/registration", post(register_handler::<R, N>))
        .route(
            "/api/v1/registration/validate",
            post(validate_handler::<R, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateRequest {
    pub(crate) role: Role,
    pub(crate) step: u8,
    pub(crate) values: FormRecord,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidateResponse {
    pub(crate) valid: bool,
    pub(crate) errors: ValidationReport,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterRequest {
    pub(crate) role: Role,
    pub(crate) values: FormRecord,
}

pub(crate) async fn validate_handler<R, N>(
    State(service): State<Arc<RegistrationService<R, N>>>,
    axum::Json(request): axum::Json<ValidateRequest>,
) -> Response
where
    R: RegistrationRepository + 'static,
    N: Notifier + 'static,
{
    let Some(step) = WizardStep::from_number(request.step) else {
        let payload = json!({ "error": format!("unknown wizard step {}", request.step) });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    let errors = service.validate_step(request.role, step, &request.values);
    let response = ValidateResponse {
        valid: errors.is_empty(),
        errors,
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

pub(crate) async fn register_handler<R, N>(
    State(service): State<Arc<RegistrationService<R, N>>>,
    axum::Json(request): axum::Json<RegisterRequest>,
) -> Response
where
    R: RegistrationRepository + 'static,
    N: Notifier + 'static,
{
    match service.register(request.role, request.values) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(RegistrationError::Invalid(report)) => {
            let payload = json!({
                "error": "registration form rejected",
                "fields": report,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegistrationError::Incomplete) => {
            let payload = json!({ "error": "account step incomplete" });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(RegistrationError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "account already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
