use axum::Json;

use crate::models::HealthResponse;

/// Liveness probe. Never touches anything outside the process.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
