//! # Dashboard Module
//!
//! Client side of the system: fetches the user profile and the playlist
//! collection from the gateway and turns them into a page.
//!
//! - [`client`] - [`GatewayClient`] and the [`Dashboard`] load / retry sequence
//! - [`view`] - pure mapping from the payloads to a [`View`]
//! - [`html`] - markup for a [`View`], including the host page and its retry script
//!
//! The markup keeps the element ids a host page script relies on:
//! `dashboard-section`, `error-section`, `retry-btn`, `user-avatar`,
//! `user-name`, `playlist-count`, `playlists-grid` and `error-message`.

pub mod client;
pub mod html;
pub mod view;

pub use client::{Dashboard, GatewayClient};
pub use html::{render_grid, render_page, render_script, render_sections};
pub use view::{
    DashboardView, ErrorView, LOAD_ERROR_MESSAGE, PlaylistCard, PlaylistGrid, UserHeader, View,
    ViewState,
};
