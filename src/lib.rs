//! Playlist Dashboard Library
//!
//! This library provides a small proxy for the Spotify Web API that holds a
//! long-lived refresh token and exchanges it for short-lived access tokens,
//! together with a renderer that turns the proxied user profile and playlist
//! collection into a dashboard page.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers and CORS middleware of the gateway
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `dashboard` - Gateway client, view description and HTML rendering
//! - `error` - Error taxonomy shared by the proxy and the renderer
//! - `management` - Access token cache and refresh
//! - `server` - Router construction and the serving loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playlist_dashboard::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> playlist_dashboard::Res<()> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     server::start_api_server(settings).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for command plumbing in the binary and the server loop.
///
/// Library operations return [`error::DashboardError`]; this boxed form lets the
/// callers mix those with I/O and address parsing errors.
///
/// # Example
///
/// ```
/// use playlist_dashboard::Res;
///
/// async fn bind_gateway(addr: &str) -> Res<tokio::net::TcpListener> {
///     Ok(tokio::net::TcpListener::bind(addr).await?)
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// Takes the same arguments as `println!`.
///
/// ```
/// info!("Gateway listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green `✓`.
///
/// ```
/// success!("Dashboard written to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with status 1.
///
/// Only for failures the process cannot continue from, such as missing
/// credentials or an address the gateway cannot bind. Code after the macro
/// never runs, so it can stand in any expression position.
///
/// ```
/// let settings = match Settings::from_env() {
///     Ok(s) => s,
///     Err(e) => error!("Cannot load settings. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
///
/// Diagnostic channel for recoverable failures: gateway handler errors and
/// dashboard loads that fell back to the error view.
///
/// ```
/// warning!("Failed to load dashboard: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
