use axum::http::{HeaderMap, header::AUTHORIZATION};

/// Why a request failed the bearer-token gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// No `Authorization` header, or an empty one.
    Missing,
    /// Header present but not exactly `Bearer <token>`.
    Malformed,
    /// Well-formed header carrying the wrong token.
    Mismatch,
}

impl AuthFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthFailure::Missing => "missing",
            AuthFailure::Malformed => "malformed",
            AuthFailure::Mismatch => "mismatch",
        }
    }
}

/// Extract the token from an `Authorization` value of the exact form
/// `Bearer <token>`.
///
/// Splitting on single spaces must yield exactly two parts, so doubled or
/// trailing spaces are rejected.
pub fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Check the request headers against the expected token.
///
/// The comparison is plain string equality and is not constant-time.
pub fn authorize(headers: &HeaderMap, expected_token: &str) -> Result<(), AuthFailure> {
    let value = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthFailure::Missing),
    };

    let value = value.to_str().map_err(|_| AuthFailure::Malformed)?;
    let token = parse_bearer(value).ok_or(AuthFailure::Malformed)?;

    if token == expected_token {
        Ok(())
    } else {
        Err(AuthFailure::Mismatch)
    }
}
