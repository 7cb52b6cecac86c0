//! DTO for health check endpoint.

use serde::Serialize;

/// Liveness response. Always `{"status":"ok","service":"shortlink"}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: "shortlink",
        }
    }
}
