//! Configuration management for the Playlist Dashboard.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, endpoint URLs and the gateway
//! address.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_REFRESH_TOKEN: &str = "SPOTIFY_REFRESH_TOKEN";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SERVER_ADDRESS: &str = "SERVER_ADDRESS";
pub const DASHBOARD_API_URL: &str = "DASHBOARD_API_URL";

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8787";
pub const DEFAULT_DASHBOARD_API_URL: &str = "http://127.0.0.1:8787";

/// Loads environment variables from `.env` files.
///
/// Creates the local data directory if it doesn't exist, then loads a `.env`
/// file from the platform-specific local data directory under
/// `playlist-dashboard/.env` and a `.env` file from the working directory.
/// Variables already present in the process environment are never overwritten,
/// and missing files are skipped.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/playlist-dashboard/.env`
/// - macOS: `~/Library/Application Support/playlist-dashboard/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-dashboard/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-dashboard/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// Client credentials and the long-lived refresh secret used for the token exchange.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// Everything the gateway needs to run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server_addr: String,
    pub credentials: ClientCredentials,
    pub token_url: String,
    pub api_url: String,
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first required credential
    /// that is not available.
    ///
    /// # Example
    ///
    /// ```
    /// let settings = Settings::from_lookup(|key| match key {
    ///     "SPOTIFY_CLIENT_ID" => Some("id".to_string()),
    ///     "SPOTIFY_CLIENT_SECRET" => Some("secret".to_string()),
    ///     "SPOTIFY_REFRESH_TOKEN" => Some("refresh".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(settings.server_addr, "127.0.0.1:8787");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        Ok(Settings {
            server_addr: get(SERVER_ADDRESS).unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string()),
            credentials: ClientCredentials {
                client_id: require(SPOTIFY_CLIENT_ID)?,
                client_secret: require(SPOTIFY_CLIENT_SECRET)?,
                refresh_token: require(SPOTIFY_REFRESH_TOKEN)?,
            },
            token_url: get(SPOTIFY_API_TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            api_url: get(SPOTIFY_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

/// Returns the base URL of the deployed gateway the renderer talks to.
///
/// Retrieves the `DASHBOARD_API_URL` environment variable and falls back to
/// the default local gateway address.
///
/// # Example
///
/// ```
/// let api_url = dashboard_api_url(); // e.g., "http://127.0.0.1:8787"
/// ```
pub fn dashboard_api_url() -> String {
    env::var(DASHBOARD_API_URL)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DASHBOARD_API_URL.to_string())
}
