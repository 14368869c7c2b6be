// Route path constants - single source of truth for all API paths

use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const AUTH_VERIFY: &str = "/api/v1/auth/verify";
pub const SECRETS: &str = "/api/v1/secrets/";
// Router uses a catch-all so nested suffixes still reach the handler;
// OpenAPI has no catch-all syntax and documents it as a single parameter.
pub const SECRET_ITEM: &str = "/api/v1/secrets/{*name}";
pub const SECRET_ITEM_DOC: &str = "/api/v1/secrets/{name}";

/// Build the application router.
///
/// `/api/v1/secrets/` behaves as a prefix: the empty suffix lists names and
/// any other suffix, slashes included, is looked up. Unknown paths fall
/// through to axum's default 404.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INDEX, any(handlers::index_handler))
        .route(HEALTH, any(handlers::health_handler))
        .route(AUTH_VERIFY, any(handlers::verify_handler))
        .route(SECRETS, any(handlers::list_secrets_handler))
        .route(SECRET_ITEM, any(handlers::get_secret_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
