use crate::auth;
use crate::error::{ApiError, ErrorResponse};
use crate::models::VerifyResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::HeaderMap, http::StatusCode};

/// GET /api/v1/auth/verify handler - Check a bearer token
#[utoipa::path(
    get,
    path = routes::AUTH_VERIFY,
    responses(
        (status = 200, description = "Token is valid", body = VerifyResponse),
        (status = 401, description = "Token is missing, malformed or wrong", body = ErrorResponse)
    ),
    security(("bearer" = [])),
    tag = "auth"
)]
pub async fn verify_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<VerifyResponse>), ApiError> {
    if let Err(failure) = auth::authorize(&headers, state.expected_token()) {
        tracing::warn!(reason = failure.as_str(), "Token verification failed");
        return Err(ApiError::InvalidToken);
    }

    tracing::info!("Token verified");
    Ok((
        StatusCode::OK,
        Json(VerifyResponse {
            status: "authenticated".to_string(),
            message: "Token is valid. You may access /api/v1/secrets/*".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{TEST_TOKEN, bearer, send, setup_test_app};

    #[tokio::test]
    async fn test_verify_valid_token() {
        let (status, body) = send(
            setup_test_app(),
            "GET",
            "/api/v1/auth/verify",
            Some(&bearer(TEST_TOKEN)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response_json: VerifyResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "authenticated");
        assert!(response_json.message.contains("/api/v1/secrets/*"));
    }

    #[tokio::test]
    async fn test_verify_missing_token() {
        let (status, body) = send(setup_test_app(), "GET", "/api/v1/auth/verify", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Invalid or missing token");
        assert!(error_response.message.is_some());
    }

    #[tokio::test]
    async fn test_verify_rejects_bad_credentials() {
        for header in [
            bearer("wrong-token"),
            format!("Bearer  {}", TEST_TOKEN),
            format!("Token {}", TEST_TOKEN),
            TEST_TOKEN.to_string(),
        ] {
            let (status, _) =
                send(setup_test_app(), "GET", "/api/v1/auth/verify", Some(&header)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "header {header:?}");
        }
    }

    #[tokio::test]
    async fn test_verify_accepts_any_method() {
        let (status, _) = send(
            setup_test_app(),
            "POST",
            "/api/v1/auth/verify",
            Some(&bearer(TEST_TOKEN)),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }
}
