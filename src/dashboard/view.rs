use crate::{
    types::{PlaylistPage, PlaylistSummary, UserProfile},
    utils,
};

pub const LOAD_ERROR_MESSAGE: &str = "Unable to load playlists. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No playlists yet.";
pub const NO_LINK: &str = "#";

/// Which of the two page sections is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Dashboard,
    Error,
}

/// Declarative description of the page. Text is kept raw; escaping happens
/// when the view is turned into markup.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard(DashboardView),
    Error(ErrorView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub header: UserHeader,
    pub grid: PlaylistGrid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserHeader {
    /// `None` hides the avatar element.
    pub avatar_url: Option<String>,
    pub name: String,
    pub playlist_count: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistGrid {
    Empty,
    Cards(Vec<PlaylistCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistCard {
    pub href: String,
    /// `None` renders the placeholder icon.
    pub image_url: Option<String>,
    pub name: String,
    pub tracks: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub message: String,
}

impl View {
    pub fn dashboard(user: &UserProfile, playlists: &PlaylistPage) -> Self {
        View::Dashboard(DashboardView {
            header: UserHeader::new(user, playlists.total),
            grid: PlaylistGrid::new(playlists.items.as_deref()),
        })
    }

    pub fn error(message: impl Into<String>) -> Self {
        View::Error(ErrorView {
            message: message.into(),
        })
    }

    pub fn state(&self) -> ViewState {
        match self {
            View::Dashboard(_) => ViewState::Dashboard,
            View::Error(_) => ViewState::Error,
        }
    }
}

impl UserHeader {
    pub fn new(user: &UserProfile, total_playlists: u64) -> Self {
        let name = user
            .display_name
            .clone()
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| user.id.clone());

        UserHeader {
            avatar_url: utils::first_image_url(user.images.as_deref()),
            name,
            playlist_count: utils::pluralize(total_playlists, "playlist"),
        }
    }
}

impl PlaylistGrid {
    pub fn new(items: Option<&[PlaylistSummary]>) -> Self {
        match items {
            Some(items) if !items.is_empty() => {
                PlaylistGrid::Cards(items.iter().map(PlaylistCard::new).collect())
            }
            _ => PlaylistGrid::Empty,
        }
    }
}

impl PlaylistCard {
    pub fn new(playlist: &PlaylistSummary) -> Self {
        let track_count = playlist.tracks.as_ref().map(|t| t.total).unwrap_or(0);
        let href = playlist
            .external_urls
            .as_ref()
            .and_then(|urls| urls.spotify.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| NO_LINK.to_string());

        PlaylistCard {
            href,
            image_url: utils::first_image_url(playlist.images.as_deref()),
            name: playlist.name.clone(),
            tracks: utils::pluralize(track_count, "track"),
        }
    }
}
