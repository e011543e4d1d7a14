use crate::{config::Settings, error, server};

pub async fn serve(addr: Option<String>) {
    let mut settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot load settings. Err: {}", e),
    };

    if let Some(addr) = addr {
        settings.server_addr = addr;
    }

    if let Err(e) = server::start_api_server(settings).await {
        error!("Gateway failed. Err: {}", e);
    }
}
