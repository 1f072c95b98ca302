use axum::Json;
use contracts::shared::health::HealthResponse;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
