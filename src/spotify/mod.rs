//! # Spotify Integration Module
//!
//! This module holds the two upstream clients the gateway talks to: the OAuth
//! token endpoint and the Web API.
//!
//! ```text
//! Gateway (api, server)
//!          ↓
//! Token Manager (management)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh_token grant)
//!     └── Data API (/me, /me/playlists)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! Payloads of the data API are relayed untouched, so [`SpotifyClient`] returns
//! the raw body after checking that it is JSON.
//!
//! ## Error Types
//!
//! - `DashboardError::UpstreamAuth` - token endpoint refused the refresh
//! - `DashboardError::UpstreamApi` - data API answered with a non-success status
//! - `DashboardError::Network` - transport failure
//! - `DashboardError::Decode` - body is not JSON

pub mod auth;

use axum::body::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;

use crate::error::DashboardError;

pub const DEFAULT_PLAYLIST_LIMIT: &str = "50";
pub const DEFAULT_PLAYLIST_OFFSET: &str = "0";

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    client: Client,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into().trim_end_matches('/').to_string();
        SpotifyClient { client, api_url }
    }

    /// Profile of the user the refresh token belongs to (`GET /me`).
    pub async fn current_user(&self, token: &str) -> Result<Bytes, DashboardError> {
        self.get_json(token, "/me", &[]).await
    }

    /// One page of the user's playlists (`GET /me/playlists`).
    ///
    /// `limit` and `offset` are forwarded without validation.
    pub async fn current_user_playlists(
        &self,
        token: &str,
        limit: &str,
        offset: &str,
    ) -> Result<Bytes, DashboardError> {
        self.get_json(token, "/me/playlists", &[("limit", limit), ("offset", offset)])
            .await
    }

    async fn get_json(
        &self,
        token: &str,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Bytes, DashboardError> {
        let api_url = format!("{uri}{endpoint}", uri = self.api_url, endpoint = endpoint);

        let mut request = self.client.get(&api_url).bearer_auth(token);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::UpstreamApi(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<IgnoredAny>(&body)?;
        Ok(body)
    }
}
