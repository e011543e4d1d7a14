use std::sync::Arc;

use axum::{Extension, response::Response};

use crate::{
    api::{AppState, json_relay},
    error::DashboardError,
};

pub async fn user(Extension(state): Extension<Arc<AppState>>) -> Result<Response, DashboardError> {
    let token = state.tokens.get_valid_token().await?;
    let user = state.spotify.current_user(&token).await?;
    Ok(json_relay(user))
}
