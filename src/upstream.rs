use anyhow::Result;
use reqwest::header::ACCEPT;
use thiserror::Error;
use tracing::{debug, trace};

use api::recorder::{Recording, RecordingsResponse};
use api::request::Credential;

use crate::config;

/// Header the DVR API checks besides the `api_password` query parameter
pub const PASSWORD_HEADER: &str = "x-api-password";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
    #[error("upstream returned status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("upstream payload malformed: {0}")]
    BadPayload(#[source] serde_json::Error),
}

/// Client for the EasyProxy DVR API. Cheap to clone, never mutated after startup.
#[derive(Clone, Debug)]
pub struct Upstream {
    client: reqwest::Client,
    url: String,
    password: String,
}

impl Upstream {
    pub fn new(cfg: &config::Upstream) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout.into())
            .build()?;
        Ok(Self {
            client,
            url: cfg.url.trim_end_matches('/').to_string(),
            password: cfg.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.url
    }

    pub fn credential(&self) -> Credential {
        Credential::new(&self.password)
    }

    /// One `GET /api/recordings`, no retries
    pub async fn recordings(&self) -> std::result::Result<Vec<Recording>, UpstreamError> {
        let url = format!("{}{}", self.url, api::path::RECORDINGS);
        debug!("fetch recordings from {}", url);

        let mut request = self
            .client
            .get(&url)
            .query(&self.credential())
            .header(ACCEPT, "application/json");
        if !self.password.is_empty() {
            request = request.header(PASSWORD_HEADER, &self.password);
        }

        let response = request.send().await.map_err(UpstreamError::Unreachable)?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::BadStatus(status));
        }

        let body = response.bytes().await.map_err(UpstreamError::Unreachable)?;
        trace!("recordings body: {:?}", String::from_utf8_lossy(&body));
        let res: RecordingsResponse =
            serde_json::from_slice(&body).map_err(UpstreamError::BadPayload)?;
        debug!("fetched {} recordings", res.recordings.len());
        Ok(res.recordings)
    }
}
