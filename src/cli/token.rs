use chrono::{DateTime, Utc};
use reqwest::Client;

use crate::{config::Settings, error, management::TokenManager, success};

pub async fn token() {
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot load settings. Err: {}", e),
    };

    let token_mgr = TokenManager::new(Client::new(), settings.credentials, settings.token_url);
    if let Err(e) = token_mgr.get_valid_token().await {
        error!("Failed to obtain access token. Err: {}", e);
    }

    if let Some(credential) = token_mgr.cache().snapshot().await {
        let expiry = DateTime::<Utc>::from_timestamp(credential.expires_at, 0)
            .map(|d| d.to_rfc3339())
            .unwrap_or_else(|| credential.expires_at.to_string());
        success!("Access token valid until {}", expiry);
    }
}
