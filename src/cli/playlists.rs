use reqwest::Client;
use tabled::Table;

use crate::{
    config,
    dashboard::{GatewayClient, view::NO_LINK},
    error, info,
    types::PlaylistTableRow,
    utils,
};

pub async fn list_playlists(api_url: Option<String>) {
    let api_url = api_url.unwrap_or_else(config::dashboard_api_url);
    let client = GatewayClient::new(Client::new(), api_url);

    let (user, playlists) = match client.fetch_all().await {
        Ok(data) => data,
        Err(e) => error!("Failed to load playlists. Err: {}", e),
    };

    let name = user.display_name.clone().unwrap_or_else(|| user.id.clone());
    info!("{} ({})", name, utils::pluralize(playlists.total, "playlist"));

    let table_rows: Vec<PlaylistTableRow> = playlists
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.tracks.map(|t| t.total).unwrap_or(0),
            link: p
                .external_urls
                .and_then(|u| u.spotify)
                .unwrap_or_else(|| NO_LINK.to_string()),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
