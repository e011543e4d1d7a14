use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::ClientCredentials,
    error::{DashboardError, REFRESH_FAILED},
    types::{TokenErrorResponse, TokenResponse},
    utils,
};

/// Exchanges the long-lived refresh token for a new access token.
///
/// Posts a form-encoded `refresh_token` grant to the token endpoint, with the
/// client id and secret sent as a Basic `Authorization` header.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `token_url` - Token endpoint, normally `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id, client secret and the refresh token
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(TokenResponse)` - The new access token and its lifetime in seconds
/// - `Err(DashboardError::UpstreamAuth)` - The endpoint answered with a non-success
///   status; carries its `error_description`, or "Failed to refresh token"
/// - `Err(DashboardError::Network)` - Connection failure or an undecodable body
///
/// # Example
///
/// ```
/// let token = refresh_access_token(&client, DEFAULT_TOKEN_URL, &credentials).await?;
/// println!("New access token expires in {} seconds", token.expires_in);
/// ```
pub async fn refresh_access_token(
    client: &Client,
    token_url: &str,
    credentials: &ClientCredentials,
) -> Result<TokenResponse, DashboardError> {
    let res = client
        .post(token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", credentials.refresh_token.as_str()),
        ])
        .send()
        .await?;

    if !res.status().is_success() {
        let body = res.text().await.unwrap_or_default();
        let error: TokenErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        let description = error
            .error_description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| REFRESH_FAILED.to_string());
        return Err(DashboardError::UpstreamAuth(description));
    }

    Ok(res.json::<TokenResponse>().await?)
}
