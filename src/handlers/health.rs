use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The site has no downstream dependencies to probe, so the check reports
/// liveness only, with the time elapsed since startup.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let uptime_seconds = (chrono::Utc::now() - state.started_at).num_seconds().max(0);

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            uptime_seconds,
        }),
    )
}
