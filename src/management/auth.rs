use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config::ClientCredentials, error::DashboardError, spotify, types::CachedCredential, utils,
};

/// Seconds before expiry at which a cached token is no longer handed out.
pub const EXPIRY_MARGIN_SECS: i64 = 300;

/// Owned holder of the single cached access token.
///
/// The cache lives as long as the value that owns it; nothing is persisted.
#[derive(Debug, Default)]
pub struct TokenCache {
    credential: Mutex<Option<CachedCredential>>,
}

impl TokenCache {
    pub fn new() -> Self {
        TokenCache::default()
    }

    pub fn with_credential(credential: CachedCredential) -> Self {
        TokenCache {
            credential: Mutex::new(Some(credential)),
        }
    }

    /// Copy of the current cache content.
    pub async fn snapshot(&self) -> Option<CachedCredential> {
        self.credential.lock().await.clone()
    }
}

pub struct TokenManager {
    client: Client,
    credentials: ClientCredentials,
    token_url: String,
    cache: TokenCache,
}

impl TokenManager {
    pub fn new(client: Client, credentials: ClientCredentials, token_url: impl Into<String>) -> Self {
        Self::with_cache(client, credentials, token_url, TokenCache::new())
    }

    pub fn with_cache(
        client: Client,
        credentials: ClientCredentials,
        token_url: impl Into<String>,
        cache: TokenCache,
    ) -> Self {
        TokenManager {
            client,
            credentials,
            token_url: token_url.into(),
            cache,
        }
    }

    /// Returns an access token that stays valid for at least five more minutes.
    ///
    /// Hands out the cached token when it is fresh enough; otherwise exchanges
    /// the refresh token for a new one and caches it. The cache lock is held
    /// across the exchange, so concurrent callers that miss wait for the one
    /// in-flight refresh and then read its result.
    ///
    /// # Errors
    ///
    /// Fails with `DashboardError::UpstreamAuth` or `DashboardError::Network`
    /// when the refresh fails. The cache is left as it was.
    pub async fn get_valid_token(&self) -> Result<String, DashboardError> {
        let mut cached = self.cache.credential.lock().await;

        let now = utils::now_epoch();
        if let Some(credential) = cached.as_ref() {
            if !Self::is_expired(credential, now) {
                return Ok(credential.token.clone());
            }
        }

        let response =
            spotify::auth::refresh_access_token(&self.client, &self.token_url, &self.credentials)
                .await?;

        let credential = CachedCredential {
            token: response.access_token,
            expires_at: now.saturating_add(response.expires_in),
        };
        let token = credential.token.clone();
        *cached = Some(credential);

        Ok(token)
    }

    fn is_expired(credential: &CachedCredential, now: i64) -> bool {
        credential.expires_at <= now + EXPIRY_MARGIN_SECS
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }
}
