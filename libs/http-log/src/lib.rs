use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use http_body_util::BodyExt;
use tracing::{error, info, trace, warn, Level};

/// Requests slower than this are logged at warn level.
/// Every addon request waits on one upstream call.
pub const SLOW_REQUEST: Duration = Duration::from_millis(500);

pub async fn log_request(req: Request, next: Next) -> Result<Response, (StatusCode, String)> {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let mut res = next.run(req).await;

    if tracing::enabled!(Level::TRACE) {
        let (parts, body) = res.into_parts();
        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(err) => {
                return Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("failed to read response body: {err}"),
                ))
            }
        };
        trace!("[{method} {uri}] body = {:?}", String::from_utf8_lossy(&bytes));
        res = Response::from_parts(parts, Body::from(bytes));
    }

    let status = res.status().as_u16();
    let elapsed = start.elapsed();
    if !res.status().is_success() {
        error!("[{method} {uri}] [{status}] {}ms {agent}", elapsed.as_millis());
    } else if elapsed > SLOW_REQUEST {
        warn!("[{method} {uri}] [{status}] {}ms {agent}", elapsed.as_millis());
    } else {
        info!("[{method} {uri}] [{status}] {}ms {agent}", elapsed.as_millis());
    }

    Ok(res)
}
