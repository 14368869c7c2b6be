use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Custom error type for API endpoints
///
/// Each variant maps to a fixed status code and JSON body. The two
/// unauthorized variants differ only in wording, one per gated route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Token check failed on `/api/v1/auth/verify`
    InvalidToken,
    /// Token check failed on `/api/v1/secrets/*`
    AuthenticationRequired,
    /// Unknown secret name
    SecretNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidToken | ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::SecretNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidToken => ErrorResponse {
                error: "Invalid or missing token".to_string(),
                message: Some(
                    "Provide valid service account token in Authorization header".to_string(),
                ),
            },
            ApiError::AuthenticationRequired => ErrorResponse {
                error: "Authentication required".to_string(),
                message: Some(
                    "Provide valid service account token in Authorization: Bearer header"
                        .to_string(),
                ),
            },
            ApiError::SecretNotFound => ErrorResponse {
                error: "Secret not found".to_string(),
                message: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
