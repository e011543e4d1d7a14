use axum::{Extension, Router, middleware, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    Res,
    api::{self, AppState},
    config::Settings,
    info, success, warning,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/user", get(api::user))
        .route("/api/playlists", get(api::playlists))
        .fallback(api::not_found)
        .layer(Extension(state))
        .layer(middleware::from_fn(api::cors))
}

pub async fn start_api_server(settings: Settings) -> Res<()> {
    let addr = SocketAddr::from_str(&settings.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let state = Arc::new(AppState::from_settings(&settings));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    success!("Gateway stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Cannot listen for Ctrl-C, graceful shutdown disabled. Err: {}", e);
        std::future::pending::<()>().await;
    }
}
