use std::fmt::Write;

use crate::{
    dashboard::view::{
        DashboardView, EMPTY_MESSAGE, LOAD_ERROR_MESSAGE, PlaylistCard, PlaylistGrid, View,
    },
    utils::escape_html,
};

const MUSIC_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/></svg>"#;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #121212; color: #fff; }
main { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.user-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 2rem; }
#user-avatar { width: 64px; height: 64px; border-radius: 50%; object-fit: cover; }
#user-name { margin: 0; }
#playlist-count { color: #b3b3b3; }
.playlists-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1.5rem; }
.playlist-card { display: block; padding: 1rem; border-radius: 8px; background: #181818; color: inherit; text-decoration: none; }
.playlist-card:hover { background: #282828; }
.playlist-image, .playlist-image-placeholder { width: 100%; aspect-ratio: 1; border-radius: 4px; object-fit: cover; }
.playlist-image-placeholder { display: flex; align-items: center; justify-content: center; background: #333; color: #777; }
.playlist-name { margin-top: 0.75rem; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.playlist-tracks { color: #b3b3b3; font-size: 0.875rem; }
.empty-state, #error-section { flex-direction: column; align-items: center; gap: 1rem; padding: 4rem 0; color: #b3b3b3; }
.empty-state { display: flex; grid-column: 1 / -1; }
#retry-btn { padding: 0.5rem 1.5rem; border: 0; border-radius: 999px; background: #1db954; color: #000; cursor: pointer; }
"#;

// Placeholders are replaced by JSON string literals in `render_script`.
const SCRIPT: &str = r#"
const API_URL = __API_URL__;
const MUSIC_ICON = __MUSIC_ICON__;
const EMPTY_MESSAGE = __EMPTY_MESSAGE__;
const LOAD_ERROR_MESSAGE = __LOAD_ERROR_MESSAGE__;

function escapeHtml(text) {
  return String(text)
    .replace(/&/g, '&amp;')
    .replace(/</g, '&lt;')
    .replace(/>/g, '&gt;')
    .replace(/"/g, '&quot;')
    .replace(/'/g, '&#39;')
    .replace(/\u00a0/g, '&nbsp;');
}

function pluralize(count, noun) {
  return count === 1 ? count + ' ' + noun : count + ' ' + noun + 's';
}

function firstImageUrl(images) {
  return images && images.length > 0 && images[0] && images[0].url ? images[0].url : null;
}

function renderCard(playlist) {
  const name = escapeHtml(playlist.name || '');
  const href = (playlist.external_urls && playlist.external_urls.spotify) || '#';
  const imageUrl = firstImageUrl(playlist.images);
  const tracks = (playlist.tracks && playlist.tracks.total) || 0;
  const image = imageUrl
    ? '<img src="' + escapeHtml(imageUrl) + '" alt="' + name + '" class="playlist-image">'
    : '<div class="playlist-image-placeholder">' + MUSIC_ICON + '</div>';
  return '<a href="' + escapeHtml(href) + '" target="_blank" rel="noopener" class="playlist-card">'
    + '<div class="playlist-image-container">' + image + '</div>'
    + '<div class="playlist-info">'
    + '<div class="playlist-name">' + name + '</div>'
    + '<div class="playlist-tracks">' + escapeHtml(pluralize(tracks, 'track')) + '</div>'
    + '</div></a>';
}

async function getJson(path) {
  const response = await fetch(API_URL + path);
  if (!response.ok) {
    throw new Error('API error: ' + response.status);
  }
  return response.json();
}

function showSection(dashboard) {
  document.getElementById('dashboard-section').style.display = dashboard ? 'block' : 'none';
  document.getElementById('error-section').style.display = dashboard ? 'none' : 'flex';
}

async function loadDashboard() {
  try {
    const [user, playlists] = await Promise.all([
      getJson('/api/user'),
      getJson('/api/playlists'),
    ]);

    const avatar = document.getElementById('user-avatar');
    const avatarUrl = firstImageUrl(user.images);
    if (avatarUrl) {
      avatar.src = avatarUrl;
      avatar.style.display = 'block';
    } else {
      avatar.removeAttribute('src');
      avatar.style.display = 'none';
    }
    document.getElementById('user-name').textContent = user.display_name || user.id || '';
    document.getElementById('playlist-count').textContent = pluralize(playlists.total || 0, 'playlist');

    const items = playlists.items || [];
    document.getElementById('playlists-grid').innerHTML = items.length > 0
      ? items.map(renderCard).join('')
      : '<div class="empty-state">' + MUSIC_ICON + '<p>' + EMPTY_MESSAGE + '</p></div>';

    showSection(true);
  } catch (err) {
    console.error('Failed to load dashboard:', err);
    document.getElementById('error-message').textContent = LOAD_ERROR_MESSAGE;
    showSection(false);
  }
}

document.getElementById('retry-btn').addEventListener('click', loadDashboard);
"#;

/// Complete HTML document hosting the dashboard and error sections.
///
/// The embedded script reloads both sections from the gateway at `api_url`
/// when the retry button is pressed.
pub fn render_page(view: &View, api_url: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>My Playlists</title>\n");
    let _ = writeln!(page, "<style>{}</style>", STYLE);
    page.push_str("</head>\n<body>\n<main>\n");
    page.push_str(&render_sections(view));
    page.push_str("</main>\n");
    let _ = writeln!(page, "<script>{}</script>", render_script(api_url));
    page.push_str("</body>\n</html>\n");
    page
}

/// The `dashboard-section` and `error-section` elements, exactly one of them visible.
pub fn render_sections(view: &View) -> String {
    let mut html = String::new();

    match view {
        View::Dashboard(dashboard) => {
            html.push_str(&render_dashboard(Some(dashboard)));
            html.push_str(&render_error(None));
        }
        View::Error(error) => {
            html.push_str(&render_dashboard(None));
            html.push_str(&render_error(Some(&error.message)));
        }
    }

    html
}

fn render_dashboard(dashboard: Option<&DashboardView>) -> String {
    let mut html = String::new();
    let display = if dashboard.is_some() { "block" } else { "none" };
    let _ = writeln!(
        html,
        "<section id=\"dashboard-section\" style=\"display: {}\">",
        display
    );

    let (avatar, name, count, grid) = match dashboard {
        Some(d) => (
            d.header.avatar_url.as_deref(),
            d.header.name.as_str(),
            d.header.playlist_count.as_str(),
            render_grid(&d.grid),
        ),
        None => (None, "", "", String::new()),
    };

    html.push_str("<header class=\"user-header\">\n");
    match avatar {
        Some(url) => {
            let _ = writeln!(
                html,
                "<img id=\"user-avatar\" src=\"{}\" alt=\"\" style=\"display: block\">",
                escape_html(url)
            );
        }
        None => html.push_str("<img id=\"user-avatar\" alt=\"\" style=\"display: none\">\n"),
    }
    html.push_str("<div class=\"user-info\">\n");
    let _ = writeln!(html, "<h1 id=\"user-name\">{}</h1>", escape_html(name));
    let _ = writeln!(html, "<span id=\"playlist-count\">{}</span>", escape_html(count));
    html.push_str("</div>\n</header>\n");

    let _ = writeln!(
        html,
        "<div id=\"playlists-grid\" class=\"playlists-grid\">{}</div>",
        grid
    );
    html.push_str("</section>\n");
    html
}

fn render_error(message: Option<&str>) -> String {
    let mut html = String::new();
    let display = if message.is_some() { "flex" } else { "none" };
    let _ = writeln!(
        html,
        "<section id=\"error-section\" style=\"display: {}\">",
        display
    );
    let _ = writeln!(
        html,
        "<p id=\"error-message\">{}</p>",
        escape_html(message.unwrap_or(LOAD_ERROR_MESSAGE))
    );
    html.push_str("<button id=\"retry-btn\" type=\"button\">Try again</button>\n");
    html.push_str("</section>\n");
    html
}

/// Retry script with the gateway base URL and the fixed texts filled in.
pub fn render_script(api_url: &str) -> String {
    SCRIPT
        .replace("__API_URL__", &js_string(api_url.trim_end_matches('/')))
        .replace("__MUSIC_ICON__", &js_string(MUSIC_ICON))
        .replace("__EMPTY_MESSAGE__", &js_string(EMPTY_MESSAGE))
        .replace("__LOAD_ERROR_MESSAGE__", &js_string(LOAD_ERROR_MESSAGE))
}

/// JavaScript string literal for `text` that cannot close the script element.
fn js_string(text: &str) -> String {
    serde_json::Value::from(text).to_string().replace('<', "\\u003c")
}

/// Inner markup of the playlist grid.
pub fn render_grid(grid: &PlaylistGrid) -> String {
    match grid {
        PlaylistGrid::Empty => format!(
            "<div class=\"empty-state\">{}<p>{}</p></div>",
            MUSIC_ICON, EMPTY_MESSAGE
        ),
        PlaylistGrid::Cards(cards) => cards.iter().map(render_card).collect(),
    }
}

fn render_card(card: &PlaylistCard) -> String {
    let name = escape_html(&card.name);
    let image = match &card.image_url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"playlist-image\">",
            escape_html(url),
            name
        ),
        None => format!(
            "<div class=\"playlist-image-placeholder\">{}</div>",
            MUSIC_ICON
        ),
    };

    format!(
        concat!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener\" class=\"playlist-card\">",
            "<div class=\"playlist-image-container\">{image}</div>",
            "<div class=\"playlist-info\">",
            "<div class=\"playlist-name\">{name}</div>",
            "<div class=\"playlist-tracks\">{tracks}</div>",
            "</div></a>"
        ),
        href = escape_html(&card.href),
        image = image,
        name = name,
        tracks = escape_html(&card.tracks),
    )
}
