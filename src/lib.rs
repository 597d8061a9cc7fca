use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderName, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, info_span, Level};

use crate::config::Config;
use crate::error::AppError;
use crate::route::AppState;
use crate::upstream::Upstream;

pub mod config;
pub mod log;
pub mod recording;
pub mod service;
pub mod signal;
pub mod upstream;
pub mod view;

mod error;
mod route;

pub async fn serve<F>(cfg: Config, listener: TcpListener, signal: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let upstream = Upstream::new(&cfg.upstream)?;
    info!("EasyProxy URL: {}", upstream.base_url());

    let app_state = AppState {
        config: cfg,
        upstream,
        manifest: Arc::new(route::addon::manifest()),
    };

    let app = Router::new()
        .merge(route::addon::route().layer(if app_state.config.http.cors {
            cors()
        } else {
            CorsLayer::new()
        }))
        .merge(route::home::route())
        .fallback(|| async { AppError::ResourceNotFound })
        .with_state(app_state)
        .layer(axum::middleware::from_fn(http_log::log_request))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        uri = ?request.uri(),
                        method = ?request.method(),
                    )
                })
                .on_response(tower_http::trace::DefaultOnResponse::new().level(Level::DEBUG)),
        );

    let addr = listener.local_addr()?;
    info!("Stremio DVR addon running at http://{}", addr);
    info!("Install addon: http://{}{}", addr, api::path::MANIFEST);

    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
