use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;

use crate::types::Image;

/// Seconds since the Unix epoch.
pub fn now_epoch() -> i64 {
    Utc::now().timestamp()
}

/// Value of the `Authorization` header for the client credentials.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", credentials)
}

/// `"1 track"`, `"0 tracks"`, `"2 tracks"`.
pub fn pluralize(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Escapes text for insertion into markup, both as element content and as a
/// quoted attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// URL of the first image in the list, if any.
pub fn first_image_url(images: Option<&[Image]>) -> Option<String> {
    images
        .and_then(|imgs| imgs.first())
        .map(|img| img.url.clone())
        .filter(|url| !url.is_empty())
}
