use serde::{Deserialize, Serialize};

use crate::{CATALOG_ID, CONTENT_TYPE, ID_PREFIX};

/// Shared secret forwarded to the DVR API as a query parameter
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Credential {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
}

impl Credential {
    pub fn new(password: &str) -> Self {
        Self {
            api_password: (!password.is_empty()).then(|| password.to_string()),
        }
    }
}

/// Catalog extra arguments, e.g. `search=news&genre=All%20Recordings`.
/// Keys may repeat; the last value wins.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CatalogExtra {
    #[serde(default)]
    pub search: Vec<String>,
    #[serde(default)]
    pub genre: Vec<String>,
}

/// `/catalog/<type>/<catalog>[/<extra>].json`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogRequest {
    /// Lowercased search query, `None` when absent or empty
    pub search: Option<String>,
}

impl CatalogRequest {
    /// Parse the path after `/catalog/`. `None` means the catalog is not ours.
    pub fn parse(rest: &str) -> Option<Self> {
        let parts = segments(rest);
        if parts.len() < 2 || decode(parts[0]) != CONTENT_TYPE {
            return None;
        }
        if !decode(parts[1]).starts_with(CATALOG_ID) {
            return None;
        }

        let mut search = None;
        for part in &parts[2..] {
            if let Ok(extra) = serde_html_form::from_str::<CatalogExtra>(part) {
                if let Some(query) = extra.search.last() {
                    search = Some(query.to_lowercase());
                }
            }
        }

        Some(Self {
            search: search.filter(|s| !s.is_empty()),
        })
    }
}

/// `/meta/<type>/dvr:<id>.json` and `/stream/<type>/dvr:<id>.json`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRequest {
    /// Recording id with the addon prefix removed
    pub id: String,
}

impl ItemRequest {
    pub fn parse(rest: &str) -> Option<Self> {
        let parts = segments(rest);
        if parts.len() != 2 || decode(parts[0]) != CONTENT_TYPE {
            return None;
        }
        let item = decode(parts[1]);
        match item.strip_prefix(ID_PREFIX) {
            Some(id) if !id.is_empty() => Some(Self { id: id.to_string() }),
            _ => None,
        }
    }
}

fn segments(rest: &str) -> Vec<&str> {
    let rest = rest.trim_start_matches('/');
    rest.strip_suffix(".json").unwrap_or(rest).split('/').collect()
}

fn decode(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}
