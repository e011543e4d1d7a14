//! # CLI Module
//!
//! Command implementations of the `playlist-dashboard` binary. Each command
//! reports progress through the crate's colored logging macros and terminates
//! with [`crate::error!`] on fatal failures.
//!
//! ## Commands
//!
//! - [`serve`] - Runs the gateway until Ctrl-C
//! - [`token`] - Obtains an access token through the token manager and shows its expiry
//! - [`render`] - Loads the dashboard through the gateway and writes the page
//! - [`list_playlists`] - Prints the playlist collection as a table
//!
//! ## Usage Patterns
//!
//! ```bash
//! playlist-dashboard token                         # Check the credentials
//! playlist-dashboard serve --addr 0.0.0.0:8787     # Run the gateway
//! playlist-dashboard render --output index.html --open
//! playlist-dashboard playlists --api-url http://127.0.0.1:8787
//! ```

mod playlists;
mod render;
mod serve;
mod token;

pub use playlists::list_playlists;
pub use render::render;
pub use serve::serve;
pub use token::token;
