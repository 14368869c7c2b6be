use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::models::{SecretListResponse, SecretNames, SecretResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode},
};

fn require_token(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    auth::authorize(headers, state.expected_token()).map_err(|failure| {
        tracing::warn!(reason = failure.as_str(), "Rejected secrets request");
        ApiError::AuthenticationRequired
    })
}

/// GET /api/v1/secrets/ handler - List secret names
///
/// Names are returned in no particular order.
#[utoipa::path(
    get,
    path = routes::SECRETS,
    responses(
        (status = 200, description = "Available secret names", body = SecretListResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "secrets"
)]
pub async fn list_secrets_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<SecretListResponse>), ApiError> {
    require_token(&state, &headers)?;

    let available_secrets = state.secrets.names();
    tracing::info!("Listed {} secrets", available_secrets.len());

    Ok((
        StatusCode::OK,
        Json(SecretListResponse {
            status: "ok".to_string(),
            data: SecretNames { available_secrets },
        }),
    ))
}

/// GET /api/v1/secrets/{name} handler - Retrieve one secret record
///
/// The token is checked before the path is inspected, so an unauthenticated
/// caller always sees 401 whatever the name.
#[utoipa::path(
    get,
    path = routes::SECRET_ITEM_DOC,
    params(
        ("name" = String, Path, description = "Exact secret name, e.g. root-flag")
    ),
    responses(
        (status = 200, description = "Secret found", body = SecretResponse),
        (status = 401, description = "Authentication required", body = ErrorResponse),
        (status = 404, description = "Secret not found", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "secrets"
)]
pub async fn get_secret_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    name: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<SecretResponse>), ApiError> {
    require_token(&state, &headers)?;

    // A suffix that fails percent-decoding cannot name a secret.
    let name = match name {
        Ok(Path(name)) => name,
        Err(rejection) => {
            tracing::info!("Undecodable secret name: {}", rejection);
            return Err(ApiError::SecretNotFound);
        }
    };

    match state.secrets.get(&name) {
        Some(record) => {
            tracing::info!("Served secret: {}", name);
            Ok((
                StatusCode::OK,
                Json(SecretResponse {
                    status: "ok".to_string(),
                    data: record
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.clone()))
                        .collect(),
                }),
            ))
        }
        None => {
            tracing::info!("Secret not found: {}", name);
            Err(ApiError::SecretNotFound)
        }
    }
}
