use super::{SERVICE_NAME, SERVICE_VERSION};
use crate::models::{HealthResponse, ServiceIdentity};
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /health handler - Liveness check
///
/// The service has no external dependencies, so this always answers 200.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            data: ServiceIdentity {
                service: SERVICE_NAME.to_string(),
                version: SERVICE_VERSION.to_string(),
            },
        }),
    )
}
