//! Addon views composed from one upstream fetch each.
//!
//! Upstream failures never reach the caller: they are logged and collapsed
//! into the view's empty shape.

use tracing::{debug, error, info};

use api::recorder::Recording;
use api::request::Credential;
use api::response::{MetaPreview, Stream};

use crate::recording::{self, Lifecycle};
use crate::upstream::{Upstream, UpstreamError};
use crate::view;

type Fetched = Result<Vec<Recording>, UpstreamError>;

pub async fn catalog(upstream: &Upstream, search: Option<&str>) -> Vec<MetaPreview> {
    info!("Fetching recordings catalog (search: {:?})", search);
    let metas = catalog_view(upstream.recordings().await, search);
    info!("Returning {} recordings", metas.len());
    metas
}

pub async fn meta(upstream: &Upstream, id: &str) -> Option<MetaPreview> {
    meta_view(upstream.recordings().await, id)
}

pub async fn streams(upstream: &Upstream, id: &str) -> Vec<Stream> {
    stream_view(
        upstream.recordings().await,
        upstream.base_url(),
        &upstream.credential(),
        id,
    )
}

pub fn catalog_view(fetched: Fetched, search: Option<&str>) -> Vec<MetaPreview> {
    match fetched {
        Ok(records) => recording::catalog(records, search)
            .iter()
            .map(view::to_display)
            .collect(),
        Err(e) => {
            error!("Error fetching recordings: {}", e);
            vec![]
        }
    }
}

pub fn meta_view(fetched: Fetched, id: &str) -> Option<MetaPreview> {
    match fetched {
        Ok(records) => records.iter().find(|r| r.id == id).map(view::to_display),
        Err(e) => {
            error!("Error fetching recording {}: {}", id, e);
            None
        }
    }
}

/// An unreachable upstream is treated as "not active": the play and delete
/// links are still offered for the requested id.
pub fn stream_view(fetched: Fetched, base: &str, credential: &Credential, id: &str) -> Vec<Stream> {
    let is_active = match fetched {
        Ok(records) => match records.iter().find(|r| r.id == id) {
            Some(r) => Lifecycle::of(r) == Lifecycle::Active,
            None => {
                debug!("Stream request for unknown recording: {}", id);
                return vec![];
            }
        },
        Err(e) => {
            error!("Error fetching recording {}: {}", id, e);
            false
        }
    };

    info!("Stream request for recording: {} (active: {})", id, is_active);
    view::to_actions(base, credential, id, is_active)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://dvr.local:8080";

    fn records() -> Vec<Recording> {
        vec![
            Recording {
                id: "done".to_string(),
                name: "Weather".to_string(),
                status: "completed".to_string(),
                started_at: "2030-01-01T00:00:00Z".to_string(),
                file_size_bytes: 10,
                ..Default::default()
            },
            Recording {
                id: "live".to_string(),
                name: "Evening News".to_string(),
                status: "recording".to_string(),
                is_active: true,
                started_at: "2020-01-01T00:00:00Z".to_string(),
                ..Default::default()
            },
            Recording {
                id: "empty".to_string(),
                name: "Morning News".to_string(),
                status: "completed".to_string(),
                ..Default::default()
            },
        ]
    }

    fn unreachable() -> Fetched {
        Err(UpstreamError::BadStatus(reqwest::StatusCode::BAD_GATEWAY))
    }

    #[test]
    fn test_catalog_view() {
        let ids: Vec<_> = catalog_view(Ok(records()), None)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(vec!["dvr:live", "dvr:done"], ids);

        let ids: Vec<_> = catalog_view(Ok(records()), Some("news"))
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(vec!["dvr:live"], ids);

        assert!(catalog_view(unreachable(), None).is_empty());
    }

    #[test]
    fn test_meta_view() {
        // hidden from the catalog but still addressable
        let meta = meta_view(Ok(records()), "empty").unwrap();
        assert_eq!("dvr:empty", meta.id);
        assert_eq!("Morning News", meta.name);

        assert!(meta_view(Ok(records()), "missing").is_none());
        assert!(meta_view(unreachable(), "live").is_none());
    }

    #[test]
    fn test_stream_view() {
        let credential = Credential::new("pw");

        let streams = stream_view(Ok(records()), BASE, &credential, "live");
        assert_eq!(1, streams.len());
        assert_eq!(
            "http://dvr.local:8080/record/stop/live?api_password=pw",
            streams[0].url
        );

        let streams = stream_view(Ok(records()), BASE, &credential, "done");
        let titles: Vec<_> = streams.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(vec![view::PLAY, view::DELETE], titles);

        assert!(stream_view(Ok(records()), BASE, &credential, "missing").is_empty());
    }

    #[test]
    fn test_stream_view_upstream_down() {
        let streams = stream_view(unreachable(), BASE, &Credential::default(), "live");
        assert_eq!(2, streams.len());
        assert_eq!("http://dvr.local:8080/api/recordings/live/stream", streams[0].url);
        assert_eq!("http://dvr.local:8080/api/recordings/live/delete", streams[1].url);
    }
}
