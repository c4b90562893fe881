//! Health check endpoint.

use axum::http::StatusCode;

/// GET /healthz - Basic liveness probe.
///
/// Returns 200 immediately without touching the repository or cache.
pub async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
