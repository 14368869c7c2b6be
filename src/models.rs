use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Response type for the service index at `/`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct IndexResponse {
    pub status: String,
    pub data: ServiceInfo,
}

/// Service metadata and the list of public endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Vec<String>,
    pub auth: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub data: ServiceIdentity,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceIdentity {
    pub service: String,
    pub version: String,
}

/// Response type for a successful token verification
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VerifyResponse {
    pub status: String,
    pub message: String,
}

/// Response type for the secret listing at `/api/v1/secrets/`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SecretListResponse {
    pub status: String,
    pub data: SecretNames,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SecretNames {
    pub available_secrets: Vec<String>,
}

/// Response type for a single secret lookup
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SecretResponse {
    pub status: String,
    pub data: BTreeMap<String, String>,
}
