use anyhow::anyhow;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use http::uri::Authority;
use http::{header, HeaderMap};
use rust_embed::RustEmbed;

use crate::error::{AppError, Result};
use crate::route::AppState;

#[derive(RustEmbed)]
#[folder = "assets/livedvr/"]
struct Assets;

pub fn route() -> Router<AppState> {
    Router::new().route("/", get(index))
}

async fn index(headers: HeaderMap) -> Result<Html<String>> {
    let page = Assets::get("index.html")
        .ok_or_else(|| AppError::InternalServerError(anyhow!("index.html is not embedded")))?;
    let template = std::str::from_utf8(&page.data)?;
    Ok(Html(render(template, &headers)))
}

// Only a bare `host[:port]` makes it into the page.
fn host(headers: &HeaderMap) -> String {
    headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<Authority>().ok())
        .filter(|a| {
            a.host()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | ':' | '[' | ']'))
        })
        .map(|a| match a.port_u16() {
            Some(port) => format!("{}:{}", a.host(), port),
            None => a.host().to_string(),
        })
        .unwrap_or_else(|| "localhost".to_string())
}

fn render(template: &str, headers: &HeaderMap) -> String {
    let host = host(headers);
    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
    {
        Some("https") => "https",
        _ => "http",
    };
    let manifest_url = format!("{}://{}{}", scheme, host, api::path::MANIFEST);
    let stremio_url = format!("stremio://{}{}", host, api::path::MANIFEST);

    template
        .replace("{{STREMIO_URL}}", &stremio_url)
        .replace("{{MANIFEST_URL}}", &manifest_url)
}
