use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{
    HealthResponse, IndexResponse, SecretListResponse, SecretNames, SecretResponse,
    ServiceIdentity, ServiceInfo, VerifyResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "secrets-vault API",
        version = "0.9.3",
        description = "Static service-account secrets behind a bearer-token check"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::verify::verify_handler,
        handlers::secrets::list_secrets_handler,
        handlers::secrets::get_secret_handler
    ),
    components(
        schemas(
            IndexResponse,
            ServiceInfo,
            HealthResponse,
            ServiceIdentity,
            VerifyResponse,
            SecretListResponse,
            SecretNames,
            SecretResponse,
            ErrorResponse
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Liveness and service metadata"),
        (name = "auth", description = "Token verification"),
        (name = "secrets", description = "Secret retrieval")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/",
            "/health",
            "/api/v1/auth/verify",
            "/api/v1/secrets/",
            "/api/v1/secrets/{name}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn test_openapi_declares_bearer_scheme() {
        let doc = ApiDoc::openapi();

        let components = doc.components.expect("components should be present");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
