use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use http::Uri;
use tracing::debug;

use api::manifest::{Manifest, ManifestCatalog, ManifestExtra};
use api::request::{CatalogRequest, ItemRequest};
use api::response::{CatalogResponse, MetaResponse, StreamsResponse};

use crate::route::AppState;
use crate::service;

pub fn route() -> Router<AppState> {
    Router::new()
        .route(api::path::MANIFEST, get(show_manifest))
        .route("/catalog/*rest", get(catalog))
        .route("/meta/*rest", get(meta))
        .route("/stream/*rest", get(stream))
        // wildcards never match an empty remainder
        .route("/catalog", get(catalog))
        .route("/catalog/", get(catalog))
        .route("/meta", get(meta))
        .route("/meta/", get(meta))
        .route("/stream", get(stream))
        .route("/stream/", get(stream))
}

pub fn manifest() -> Manifest {
    Manifest {
        id: "org.stremio.dvr-local".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: "DVR Recordings".to_string(),
        description: "Local addon for EasyProxy DVR recordings".to_string(),
        resources: vec!["catalog".to_string(), "stream".to_string(), "meta".to_string()],
        types: vec![api::CONTENT_TYPE.to_string()],
        catalogs: vec![ManifestCatalog {
            kind: api::CONTENT_TYPE.to_string(),
            id: api::CATALOG_ID.to_string(),
            name: "DVR Recordings".to_string(),
            extra: vec![
                ManifestExtra {
                    name: "genre".to_string(),
                    is_required: false,
                    options: vec!["All Recordings".to_string()],
                },
                ManifestExtra {
                    name: "search".to_string(),
                    is_required: false,
                    options: vec![],
                },
            ],
        }],
        id_prefixes: vec![api::ID_PREFIX.to_string()],
    }
}

async fn show_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.manifest.as_ref().clone())
}

// The raw path is split by hand: a `/` inside an encoded search query must
// not create a new segment.
fn resource_path<'a>(uri: &'a Uri, prefix: &str) -> &'a str {
    uri.path().strip_prefix(prefix).unwrap_or_default()
}

async fn catalog(State(state): State<AppState>, uri: Uri) -> Json<CatalogResponse> {
    let metas = match CatalogRequest::parse(resource_path(&uri, "/catalog/")) {
        Some(req) => service::catalog(&state.upstream, req.search.as_deref()).await,
        None => {
            debug!("unsupported catalog path: {}", uri.path());
            vec![]
        }
    };
    Json(CatalogResponse { metas })
}

async fn meta(State(state): State<AppState>, uri: Uri) -> Json<MetaResponse> {
    let meta = match ItemRequest::parse(resource_path(&uri, "/meta/")) {
        Some(req) => service::meta(&state.upstream, &req.id).await,
        None => {
            debug!("unsupported meta path: {}", uri.path());
            None
        }
    };
    Json(MetaResponse { meta })
}

async fn stream(State(state): State<AppState>, uri: Uri) -> Json<StreamsResponse> {
    let streams = match ItemRequest::parse(resource_path(&uri, "/stream/")) {
        Some(req) => service::streams(&state.upstream, &req.id).await,
        None => {
            debug!("unsupported stream path: {}", uri.path());
            vec![]
        }
    };
    Json(StreamsResponse { streams })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_document() {
        let value = serde_json::to_value(manifest()).unwrap();
        assert_eq!("org.stremio.dvr-local", value["id"]);
        assert_eq!(serde_json::json!(["dvr:"]), value["idPrefixes"]);
        assert_eq!("tv", value["catalogs"][0]["type"]);
        assert_eq!("dvr-recordings", value["catalogs"][0]["id"]);
        assert_eq!(
            serde_json::json!([
                {"name": "genre", "isRequired": false, "options": ["All Recordings"]},
                {"name": "search", "isRequired": false}
            ]),
            value["catalogs"][0]["extra"]
        );
    }
}
