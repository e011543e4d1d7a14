use std::sync::Arc;

use axum::{Extension, extract::Query, response::Response};

use crate::{
    api::{AppState, json_relay},
    error::DashboardError,
    spotify::{DEFAULT_PLAYLIST_LIMIT, DEFAULT_PLAYLIST_OFFSET},
};

#[derive(Debug, Default)]
pub struct PlaylistParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PlaylistParams {
    /// First `limit` and `offset` of the query; repeated keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = PlaylistParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// `limit` and `offset` as forwarded upstream; absent or empty values fall back to 50 / 0.
    pub fn resolve(&self) -> (&str, &str) {
        (
            non_empty(&self.limit).unwrap_or(DEFAULT_PLAYLIST_LIMIT),
            non_empty(&self.offset).unwrap_or(DEFAULT_PLAYLIST_OFFSET),
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub async fn playlists(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let params = PlaylistParams::from_pairs(pairs);
    let (limit, offset) = params.resolve();
    let token = state.tokens.get_valid_token().await?;
    let playlists = state
        .spotify
        .current_user_playlists(&token, limit, offset)
        .await?;
    Ok(json_relay(playlists))
}
