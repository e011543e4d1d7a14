use std::sync::Arc;

use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::{Value, json};

use playlist_dashboard::api::AppState;
use playlist_dashboard::config::{ClientCredentials, Settings};
use playlist_dashboard::dashboard::{
    Dashboard, GatewayClient, LOAD_ERROR_MESSAGE, PlaylistGrid, View, ViewState, render_page,
    render_script, render_sections,
};
use playlist_dashboard::server::router;
use playlist_dashboard::types::{PlaylistPage, UserProfile};

// Helper function to build the typed payloads from JSON fixtures
fn user_from(value: Value) -> UserProfile {
    serde_json::from_value(value).expect("user profile")
}

fn playlists_from(value: Value) -> PlaylistPage {
    serde_json::from_value(value).expect("playlist page")
}

fn ann() -> Value {
    json!({"id": "u1", "display_name": "Ann", "images": []})
}

fn two_playlists() -> Value {
    json!({
        "total": 2,
        "items": [
            {"name": "A", "tracks": {"total": 5}, "images": [], "external_urls": {}},
            {
                "name": "B",
                "tracks": {"total": 1},
                "images": [{"url": "https://i.scdn.co/b"}],
                "external_urls": {"spotify": "https://open.spotify.com/playlist/b"}
            }
        ]
    })
}

fn dashboard_of(view: &View) -> &playlist_dashboard::dashboard::DashboardView {
    match view {
        View::Dashboard(d) => d,
        View::Error(e) => panic!("expected dashboard, got error {}", e.message),
    }
}

#[test]
fn header_uses_display_name_and_pluralized_count() {
    let view = View::dashboard(&user_from(ann()), &playlists_from(two_playlists()));
    let dashboard = dashboard_of(&view);

    assert_eq!(view.state(), ViewState::Dashboard);
    assert_eq!(dashboard.header.name, "Ann");
    assert_eq!(dashboard.header.playlist_count, "2 playlists");
    assert_eq!(dashboard.header.avatar_url, None);
}

#[test]
fn header_falls_back_to_id_and_first_avatar() {
    let user = user_from(json!({
        "id": "u1",
        "display_name": null,
        "images": [{"url": "https://i.scdn.co/first"}, {"url": "https://i.scdn.co/second"}]
    }));
    let view = View::dashboard(&user, &playlists_from(json!({"total": 1, "items": []})));
    let dashboard = dashboard_of(&view);

    assert_eq!(dashboard.header.name, "u1");
    assert_eq!(dashboard.header.playlist_count, "1 playlist");
    assert_eq!(
        dashboard.header.avatar_url.as_deref(),
        Some("https://i.scdn.co/first")
    );
}

#[test]
fn cards_carry_link_image_and_track_count() {
    let view = View::dashboard(&user_from(ann()), &playlists_from(two_playlists()));
    let PlaylistGrid::Cards(cards) = &dashboard_of(&view).grid else {
        panic!("expected cards");
    };

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].name, "A");
    assert_eq!(cards[0].tracks, "5 tracks");
    assert_eq!(cards[0].href, "#");
    assert_eq!(cards[0].image_url, None);

    assert_eq!(cards[1].tracks, "1 track");
    assert_eq!(cards[1].href, "https://open.spotify.com/playlist/b");
    assert_eq!(cards[1].image_url.as_deref(), Some("https://i.scdn.co/b"));
}

#[test]
fn missing_track_count_reads_as_zero() {
    let page = playlists_from(json!({"total": 1, "items": [{"name": "Bare"}]}));
    let view = View::dashboard(&user_from(ann()), &page);
    let PlaylistGrid::Cards(cards) = &dashboard_of(&view).grid else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].tracks, "0 tracks");
}

#[test]
fn empty_collection_renders_placeholder() {
    for page in [
        json!({"total": 0, "items": []}),
        json!({"total": 0, "items": null}),
        json!({"total": 0}),
    ] {
        let view = View::dashboard(&user_from(ann()), &playlists_from(page));
        let dashboard = dashboard_of(&view);
        assert_eq!(dashboard.grid, PlaylistGrid::Empty);
        assert_eq!(dashboard.header.playlist_count, "0 playlists");

        let html = render_sections(&view);
        assert!(html.contains("class=\"empty-state\""));
        assert!(html.contains("No playlists yet."));
        assert!(!html.contains("playlist-card"));
    }
}

#[test]
fn playlist_names_are_escaped() {
    let page = playlists_from(json!({
        "total": 1,
        "items": [{
            "name": "<script>alert(1)</script>",
            "tracks": {"total": 3},
            "images": [{"url": "https://i.scdn.co/x"}],
            "external_urls": {"spotify": "https://open.spotify.com/playlist/x"}
        }]
    }));
    let html = render_sections(&View::dashboard(&user_from(ann()), &page));

    assert!(!html.contains("<script>"));
    assert!(html.contains("<div class=\"playlist-name\">&lt;script&gt;alert(1)&lt;/script&gt;</div>"));
    assert!(html.contains("alt=\"&lt;script&gt;alert(1)&lt;/script&gt;\""));
}

#[test]
fn dashboard_markup_shows_dashboard_and_hides_error() {
    let view = View::dashboard(&user_from(ann()), &playlists_from(two_playlists()));
    let html = render_sections(&view);

    assert!(html.contains("<section id=\"dashboard-section\" style=\"display: block\">"));
    assert!(html.contains("<section id=\"error-section\" style=\"display: none\">"));
    assert!(html.contains("<img id=\"user-avatar\" alt=\"\" style=\"display: none\">"));
    assert!(html.contains("<h1 id=\"user-name\">Ann</h1>"));
    assert!(html.contains("<span id=\"playlist-count\">2 playlists</span>"));
    assert!(html.contains("id=\"playlists-grid\""));
    assert_eq!(html.matches("class=\"playlist-card\"").count(), 2);
    assert!(html.contains("<div class=\"playlist-tracks\">5 tracks</div>"));
    assert!(html.contains("href=\"#\""));
}

#[test]
fn error_markup_shows_error_and_hides_dashboard() {
    let view = View::error(LOAD_ERROR_MESSAGE);
    assert_eq!(view.state(), ViewState::Error);

    let html = render_sections(&view);
    assert!(html.contains("<section id=\"dashboard-section\" style=\"display: none\">"));
    assert!(html.contains("<section id=\"error-section\" style=\"display: flex\">"));
    assert!(html.contains(&format!("<p id=\"error-message\">{}</p>", LOAD_ERROR_MESSAGE)));
    assert!(html.contains("id=\"retry-btn\""));
}

#[test]
fn page_wraps_sections_in_a_document() {
    let view = View::error(LOAD_ERROR_MESSAGE);
    let page = render_page(&view, "http://127.0.0.1:3001");

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains(&render_sections(&view)));
    assert!(page.trim_end().ends_with("</html>"));
}

#[test]
fn retry_button_refetches_from_the_gateway() {
    let page = render_page(&View::error(LOAD_ERROR_MESSAGE), "http://127.0.0.1:3001/");

    assert!(page.contains("<button id=\"retry-btn\" type=\"button\">Try again</button>"));
    assert!(page.contains("const API_URL = \"http://127.0.0.1:3001\";"));
    assert!(page.contains("getJson('/api/user')"));
    assert!(page.contains("getJson('/api/playlists')"));
    assert!(page.contains("addEventListener('click', loadDashboard)"));
    assert!(!page.contains("location.reload"));
}

#[test]
fn script_literals_cannot_close_the_script_element() {
    let script = render_script("http://evil</script><script>alert(1)//");

    assert!(!script.contains("</script>"));
    assert!(!script.contains("</svg>"));
    assert!(script.contains(r"http://evil\u003c/script>\u003cscript>alert(1)//"));
}

#[test]
fn null_fields_read_as_missing() {
    let user = user_from(json!({"id": null, "display_name": "Ann", "images": [{"url": null}]}));
    let page = playlists_from(json!({
        "total": null,
        "items": [{"name": null, "tracks": {"total": null}, "images": [{"url": null}]}]
    }));

    let view = View::dashboard(&user, &page);
    let dashboard = dashboard_of(&view);
    assert_eq!(dashboard.header.avatar_url, None);
    assert_eq!(dashboard.header.playlist_count, "0 playlists");
    let PlaylistGrid::Cards(cards) = &dashboard.grid else {
        panic!("expected cards");
    };
    assert_eq!(cards[0].name, "");
    assert_eq!(cards[0].tracks, "0 tracks");
    assert_eq!(cards[0].image_url, None);
}

#[tokio::test]
async fn load_fails_over_to_error_view_and_retry_recovers() {
    let mut gateway = Server::new_async().await;
    let failing = gateway
        .mock("GET", "/api/user")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(json!({"error": "Refresh token revoked"}).to_string())
        .expect(1)
        .create_async()
        .await;
    let _playlists = gateway
        .mock("GET", "/api/playlists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(two_playlists().to_string())
        .create_async()
        .await;

    let mut dashboard = Dashboard::new(GatewayClient::new(Client::new(), gateway.url()));
    assert!(dashboard.view().is_none());

    let view = dashboard.load().await.clone();
    assert_eq!(view, View::error(LOAD_ERROR_MESSAGE));
    failing.assert_async().await;
    failing.remove_async().await;

    let _user = gateway
        .mock("GET", "/api/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ann().to_string())
        .create_async()
        .await;

    let view = dashboard.retry().await;
    assert_eq!(view.state(), ViewState::Dashboard);
    assert_eq!(dashboard_of(view).header.name, "Ann");
}

#[tokio::test]
async fn unreachable_gateway_shows_error_view() {
    let mut dashboard = Dashboard::new(GatewayClient::new(Client::new(), "http://127.0.0.1:1"));
    let view = dashboard.load().await;
    assert_eq!(view.state(), ViewState::Error);
}

#[tokio::test]
async fn end_to_end_through_the_gateway() {
    let mut upstream = Server::new_async().await;
    let _token = upstream
        .mock("POST", "/api/token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"access_token": "new-access", "expires_in": 3600}).to_string())
        .expect(1)
        .create_async()
        .await;
    let _me = upstream
        .mock("GET", "/me")
        .match_header("authorization", "Bearer new-access")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ann().to_string())
        .create_async()
        .await;
    let _playlists = upstream
        .mock("GET", "/me/playlists")
        .match_header("authorization", "Bearer new-access")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "50".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(two_playlists().to_string())
        .create_async()
        .await;

    let settings = Settings {
        server_addr: "127.0.0.1:0".to_string(),
        credentials: ClientCredentials {
            client_id: "test_id".to_string(),
            client_secret: "test_secret".to_string(),
            refresh_token: "refresh-secret".to_string(),
        },
        token_url: format!("{}/api/token", upstream.url()),
        api_url: upstream.url(),
    };
    let app = router(Arc::new(AppState::from_settings(&settings)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    let mut dashboard = Dashboard::new(GatewayClient::new(
        Client::new(),
        format!("http://{}", addr),
    ));
    let view = dashboard.load().await;
    let html = render_page(view, &format!("http://{}", addr));
    let dashboard_view = dashboard_of(view);

    assert_eq!(dashboard_view.header.name, "Ann");
    assert_eq!(dashboard_view.header.playlist_count, "2 playlists");
    let PlaylistGrid::Cards(cards) = &dashboard_view.grid else {
        panic!("expected cards");
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].tracks, "5 tracks");

    assert!(html.contains("<h1 id=\"user-name\">Ann</h1>"));
    assert!(html.contains("<span id=\"playlist-count\">2 playlists</span>"));
}

#[tokio::test]
async fn render_command_writes_page_to_file() {
    let mut gateway = Server::new_async().await;
    let _user = gateway
        .mock("GET", "/api/user")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ann().to_string())
        .create_async()
        .await;
    let _playlists = gateway
        .mock("GET", "/api/playlists")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"total": 0, "items": []}).to_string())
        .create_async()
        .await;

    let dir = tempfile::tempdir().expect("tmpdir");
    let path = dir.path().join("index.html");
    playlist_dashboard::cli::render(Some(gateway.url()), Some(path.clone()), false).await;

    let page = std::fs::read_to_string(&path).expect("rendered page");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<h1 id=\"user-name\">Ann</h1>"));
    assert!(page.contains("No playlists yet."));
    assert!(page.contains(&format!("const API_URL = \"{}\";", gateway.url())));
}
