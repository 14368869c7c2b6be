use super::{SERVICE_NAME, SERVICE_VERSION};
use crate::models::{IndexResponse, ServiceInfo};
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET / handler - Service metadata and public endpoint list
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Service metadata", body = IndexResponse)
    ),
    tag = "health"
)]
pub async fn index_handler() -> (StatusCode, Json<IndexResponse>) {
    (
        StatusCode::OK,
        Json(IndexResponse {
            status: "ok".to_string(),
            data: ServiceInfo {
                service: SERVICE_NAME.to_string(),
                version: SERVICE_VERSION.to_string(),
                endpoints: [routes::HEALTH, routes::SECRETS, routes::AUTH_VERIFY]
                    .iter()
                    .map(|path| path.to_string())
                    .collect(),
                auth: "Required: Authorization: Bearer <service-account-token>".to_string(),
            },
        }),
    )
}
