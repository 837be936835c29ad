//! Health check endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Offered languages whose dictionary cannot be read
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_locales: Vec<String>,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            missing_locales: Vec::new(),
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}

/// Readiness check endpoint (checks the default dictionary is served)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let locale = &state.services.locale;
    let missing = locale
        .verify(std::slice::from_ref(locale.default_language()))
        .await;

    if missing.is_empty() {
        return (StatusCode::OK, Json(HealthResponse::new("ready")));
    }

    let mut body = HealthResponse::new("unavailable");
    body.missing_locales = missing.iter().map(|l| l.to_string()).collect();
    (StatusCode::SERVICE_UNAVAILABLE, Json(body))
}
