//! # API Module
//!
//! HTTP endpoints of the gateway. Every route is read-only and relays JSON from
//! the Spotify Web API with permissive cross-origin headers.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, always `{"status":"ok"}`
//! - [`user`] - `GET /api/user`, the profile behind the refresh token
//! - [`playlists`] - `GET /api/playlists?limit=&offset=`, one page of playlists
//! - [`not_found`] - every other path, `404 {"error":"Not found"}`
//!
//! [`cors`] answers `OPTIONS` preflights for any path and adds the cross-origin
//! headers to every response. Handler failures become `500 {"error": <message>}`
//! through the `IntoResponse` impl of [`crate::error::DashboardError`].
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use playlist_dashboard::{api::AppState, server};
//!
//! let state = AppState::from_settings(&settings);
//! let app = server::router(state);
//! ```

mod cors;
mod health;
mod not_found;
mod playlists;
mod user;

pub use cors::cors;
pub use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN, MAX_AGE};
pub use health::health;
pub use not_found::not_found;
pub use playlists::PlaylistParams;
pub use playlists::playlists;
pub use user::user;

use axum::{
    body::Bytes,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use reqwest::Client;

use crate::{config::Settings, management::TokenManager, spotify::SpotifyClient};

/// Shared state of the gateway handlers.
pub struct AppState {
    pub tokens: TokenManager,
    pub spotify: SpotifyClient,
}

impl AppState {
    pub fn new(tokens: TokenManager, spotify: SpotifyClient) -> Self {
        AppState { tokens, spotify }
    }

    /// Builds the token manager and the API client over one shared HTTP client.
    pub fn from_settings(settings: &Settings) -> Self {
        let client = Client::new();
        let tokens = TokenManager::new(
            client.clone(),
            settings.credentials.clone(),
            settings.token_url.clone(),
        );
        let spotify = SpotifyClient::new(client, settings.api_url.clone());
        AppState { tokens, spotify }
    }
}

/// Response carrying an upstream JSON body byte for byte.
pub fn json_relay(body: Bytes) -> Response {
    ([(CONTENT_TYPE, "application/json")], body).into_response()
}
