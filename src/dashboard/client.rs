use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    dashboard::view::{LOAD_ERROR_MESSAGE, View},
    error::DashboardError,
    types::{PlaylistPage, UserProfile},
    warning,
};

/// HTTP client for the gateway routes the renderer needs.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GatewayClient { client, base_url }
    }

    pub async fn fetch_user(&self) -> Result<UserProfile, DashboardError> {
        self.fetch("/api/user").await
    }

    pub async fn fetch_playlists(&self) -> Result<PlaylistPage, DashboardError> {
        self.fetch("/api/playlists").await
    }

    /// User profile and playlist collection, requested concurrently. Fails if either fails.
    pub async fn fetch_all(&self) -> Result<(UserProfile, PlaylistPage), DashboardError> {
        tokio::try_join!(self.fetch_user(), self.fetch_playlists())
    }

    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, DashboardError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Gateway(status));
        }
        Ok(response.json::<T>().await?)
    }
}

/// Load sequence of the dashboard page.
pub struct Dashboard {
    client: GatewayClient,
    view: Option<View>,
}

impl Dashboard {
    pub fn new(client: GatewayClient) -> Self {
        Dashboard { client, view: None }
    }

    /// Fetches both payloads and switches to the dashboard view, or to the
    /// error view when either request fails. The failure itself is only logged.
    pub async fn load(&mut self) -> &View {
        let view = match self.client.fetch_all().await {
            Ok((user, playlists)) => View::dashboard(&user, &playlists),
            Err(e) => {
                warning!("Failed to load dashboard: {}", e);
                View::error(LOAD_ERROR_MESSAGE)
            }
        };
        self.view.insert(view)
    }

    /// Re-runs the load sequence, as the retry control does.
    pub async fn retry(&mut self) -> &View {
        self.load().await
    }

    /// The view of the last load, `None` before the first one.
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }
}
