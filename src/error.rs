use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: i64,
}

/// Custom error type for the site's handlers.
///
/// Unmatched paths never reach a handler here; they fall through to the
/// router's default not-found response. The only locally produced failure is
/// an internal inconsistency between the router and the page table.
#[derive(Debug)]
pub enum SiteError {
    /// A matched path has no entry in the page table
    RouteNotInTable(String),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            SiteError::RouteNotInTable(path) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("No page table entry for matched path '{}'", path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
