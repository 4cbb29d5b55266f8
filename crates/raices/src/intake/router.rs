use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::ApplicationForm;
use super::gateway::CmsGateway;
use super::service::{ApplicationService, IntakeError};

const GENERIC_FAILURE_MESSAGE: &str = "Could not save application. Please try again.";

/// Router builder exposing the public submission endpoint.
pub fn intake_router<G>(service: Arc<ApplicationService<G>>) -> Router
where
    G: CmsGateway + 'static,
{
    Router::new()
        .route("/apply", post(apply_handler::<G>))
        .with_state(service)
}

pub(crate) async fn apply_handler<G>(
    State(service): State<Arc<ApplicationService<G>>>,
    axum::Json(form): axum::Json<ApplicationForm>,
) -> Response
where
    G: CmsGateway + 'static,
{
    match service.submit(form).await {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "persisted": receipt.persisted,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(IntakeError::Validation(err)) => {
            let payload = json!({
                "message": err.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            // Client gets a generic message; the full error stays server-side.
            error!(error = %other, "application submission failed");
            let payload = json!({
                "message": GENERIC_FAILURE_MESSAGE,
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
