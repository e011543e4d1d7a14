use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::warning;

pub const REFRESH_FAILED: &str = "Failed to refresh token";
const INTERNAL_ERROR: &str = "Internal server error";

/// Failures of the token exchange, the upstream data API, the gateway and the
/// transport underneath all of them.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The OAuth token endpoint refused the refresh. Carries the upstream description.
    #[error("{0}")]
    UpstreamAuth(String),

    #[error("Spotify API error: {}", .0.as_u16())]
    UpstreamApi(StatusCode),

    #[error("API error: {}", .0.as_u16())]
    Gateway(StatusCode),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not found")]
    NotFound,
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut message = self.to_string();
        if message.is_empty() {
            message = INTERNAL_ERROR.to_string();
        }

        if status != StatusCode::NOT_FOUND {
            warning!("Gateway error: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}
