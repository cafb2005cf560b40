use crate::error::HealthResponse;
use crate::routes;
use axum::Json;

/// GET /health handler - Health check endpoint
///
/// Returns a fixed status payload. Deliberately does not touch the store:
/// this reports that the service process is up, nothing more.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
