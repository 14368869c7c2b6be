pub mod health;
pub mod index;
pub mod secrets;
pub mod verify;

pub use health::health_handler;
pub use index::index_handler;
pub use secrets::{get_secret_handler, list_secrets_handler};
pub use verify::verify_handler;

pub const SERVICE_NAME: &str = "secrets-vault";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::{Config, TokenSource};
    use crate::routes;
    use crate::state::AppState;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::AUTHORIZATION},
    };
    use tower::ServiceExt;

    pub const TEST_TOKEN: &str = "test-token-12345";
    pub const TEST_FLAG: &str = "HTB{test_root_flag}";

    pub fn setup_test_app() -> Router {
        let config = Config {
            root_flag: TEST_FLAG.to_string(),
            expected_token: TEST_TOKEN.to_string(),
            token_source: TokenSource::Default,
            service_port: 443,
            service_host: "0.0.0.0".to_string(),
            tls: None,
        };

        routes::router(AppState::new(config))
    }

    /// Send a request and return the status with the raw body bytes.
    pub async fn send(
        app: Router,
        method: &str,
        uri: &str,
        authorization: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }

        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    pub fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}
