use std::{io, path::PathBuf, time::Duration};

use tokio::task;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config, error, info,
    dashboard::{Dashboard, GatewayClient, View, ViewState, render_page},
    success, warning,
};

pub async fn render(api_url: Option<String>, output: Option<PathBuf>, open: bool) {
    let api_url = api_url.unwrap_or_else(config::dashboard_api_url);
    if output.is_some() {
        info!("Loading dashboard from {}", api_url);
    }

    let mut dashboard = Dashboard::new(GatewayClient::new(Client::new(), api_url.clone()));
    let mut view = load_with_spinner(&mut dashboard, false).await;

    while view.state() == ViewState::Error && ask_retry().await {
        view = load_with_spinner(&mut dashboard, true).await;
    }

    let page = render_page(&view, &api_url);

    match output {
        Some(path) => {
            if let Err(e) = async_fs::write(&path, page).await {
                error!("Failed to write {}. Err: {}", path.display(), e);
            }
            success!("Dashboard written to {}", path.display());

            if open && webbrowser::open(&path.to_string_lossy()).is_err() {
                warning!(
                    "Failed to open browser. Please open the following file manually:\n{}",
                    path.display()
                );
            }
        }
        None => {
            if open {
                warning!("--open needs --output, printing the page instead.");
            }
            println!("{}", page);
        }
    }
}

async fn load_with_spinner(dashboard: &mut Dashboard, retry: bool) -> View {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching user and playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let view = if retry {
        dashboard.retry().await.clone()
    } else {
        dashboard.load().await.clone()
    };

    pb.finish_and_clear();
    view
}

async fn ask_retry() -> bool {
    eprintln!("Unable to load playlists. Try again? [y/N]");
    let answer = task::spawn_blocking(|| {
        let mut answer = String::new();
        io::stdin().read_line(&mut answer).map(|_| answer)
    })
    .await;

    match answer {
        Ok(Ok(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}
