use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;

use livedvr::config::{Config, UpstreamTimeout};

pub async fn shutdown_signal() {
    let _str = livedvr::signal::wait_for_stop_signal().await;
}

fn localhost() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
}

/// Credentials the fake DVR API received: (`api_password` query, `x-api-password` header)
pub type Seen = Arc<Mutex<Vec<(Option<String>, Option<String>)>>>;

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    seen: Seen,
}

async fn recordings(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    upstream.seen.lock().unwrap().push((
        query.get("api_password").cloned(),
        headers
            .get("x-api-password")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string()),
    ));
    (upstream.status, upstream.body)
}

/// Fake EasyProxy DVR API answering `GET /api/recordings` with `body`
pub async fn fake_upstream(status: StatusCode, body: String) -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route(api::path::RECORDINGS, get(recordings))
        .with_state(Upstream {
            status,
            body,
            seen: seen.clone(),
        });

    let listener = TcpListener::bind(localhost()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    (format!("http://{addr}"), seen)
}

pub async fn json_upstream(body: serde_json::Value) -> (String, Seen) {
    fake_upstream(StatusCode::OK, body.to_string()).await
}

/// Fake DVR API that accepts the request but answers only after `delay`
pub async fn slow_upstream(delay: Duration) -> String {
    let app = Router::new().route(
        api::path::RECORDINGS,
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(serde_json::json!({ "recordings": [] }))
        }),
    );

    let listener = TcpListener::bind(localhost()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

/// An address nothing listens on
pub async fn dead_upstream() -> String {
    let listener = TcpListener::bind(localhost()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub async fn start_addon(upstream_url: &str, password: &str) -> SocketAddr {
    start_addon_with_timeout(upstream_url, password, UpstreamTimeout(2000)).await
}

pub async fn start_addon_with_timeout(
    upstream_url: &str,
    password: &str,
    timeout: UpstreamTimeout,
) -> SocketAddr {
    let mut cfg = Config::default();
    cfg.upstream.url = upstream_url.to_string();
    cfg.upstream.password = password.to_string();
    cfg.upstream.timeout = timeout;

    let listener = TcpListener::bind(localhost()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(livedvr::serve(cfg, listener, shutdown_signal()));
    addr
}
