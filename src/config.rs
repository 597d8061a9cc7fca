use serde::{Deserialize, Serialize};
use std::{env, fs, net::SocketAddr, str::FromStr, time::Duration};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub http: Http,
    #[serde(default)]
    pub upstream: Upstream,
    #[serde(default)]
    pub log: Log,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Http {
    #[serde(default = "default_http_listen")]
    pub listen: SocketAddr,
    #[serde(default = "default_true")]
    pub cors: bool,
}

/// EasyProxy DVR API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Upstream {
    #[serde(default = "default_upstream_url")]
    pub url: String,
    /// Empty means no credential is forwarded
    #[serde(default = "default_upstream_password")]
    pub password: String,
    #[serde(default)]
    pub timeout: UpstreamTimeout,
}

/// Milliseconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpstreamTimeout(pub u64);

impl Default for UpstreamTimeout {
    fn default() -> Self {
        UpstreamTimeout(10 * 1000)
    }
}

impl From<UpstreamTimeout> for Duration {
    fn from(t: UpstreamTimeout) -> Self {
        Duration::from_millis(t.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_true() -> bool {
    true
}

fn default_http_listen() -> SocketAddr {
    SocketAddr::from_str(&format!(
        "0.0.0.0:{}",
        env::var("PORT").unwrap_or(String::from("7001"))
    ))
    .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 7001)))
}

impl Default for Http {
    fn default() -> Self {
        Self {
            listen: default_http_listen(),
            cors: true,
        }
    }
}

fn default_upstream_url() -> String {
    env::var("EASYPROXY_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or(String::from("http://localhost:8080"))
}

fn default_upstream_password() -> String {
    env::var("EASYPROXY_PASSWORD").unwrap_or_default()
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            url: default_upstream_url(),
            password: default_upstream_password(),
            timeout: Default::default(),
        }
    }
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    env::var("LOG_LEVEL").unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "info".to_string()
        }
    })
}

impl Config {
    pub fn parse(path: Option<String>) -> anyhow::Result<Self> {
        let result = fs::read_to_string(path.unwrap_or(String::from("livedvr.toml")))
            .or(fs::read_to_string("/etc/livedvr/livedvr.toml"))
            .unwrap_or("".to_string());
        let mut cfg: Self = toml::from_str(result.as_str())?;
        cfg.upstream.url = cfg.upstream.url.trim_end_matches('/').to_string();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let url = url::Url::parse(&self.upstream.url)
            .map_err(|e| anyhow::anyhow!("invalid upstream url {:?}: {}", self.upstream.url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow::anyhow!(
                "upstream url must be http or https, got {:?}",
                url.scheme()
            ));
        }
        if self.upstream.timeout.0 == 0 {
            return Err(anyhow::anyhow!("upstream timeout must be greater than 0"));
        }

        Ok(())
    }
}
