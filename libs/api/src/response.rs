use serde::{Deserialize, Serialize};

/// Catalog and meta item, the addon protocol's `MetaPreview`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub poster: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `YYYY-MM-DD` start date
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub release_info: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub runtime: String,
}

/// Playable or actionable link offered for one item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Stream {
    pub url: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// `meta` is serialized as `null` when the item is unknown
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MetaResponse {
    pub meta: Option<MetaPreview>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct StreamsResponse {
    pub streams: Vec<Stream>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_response_null() {
        let body = serde_json::to_string(&MetaResponse::default()).unwrap();
        assert_eq!(r#"{"meta":null}"#, body);
    }

    #[test]
    fn test_meta_preview_skips_empty() {
        let meta = MetaPreview {
            id: "dvr:1".to_string(),
            kind: "tv".to_string(),
            name: "News".to_string(),
            runtime: "1m".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            serde_json::json!({"id": "dvr:1", "type": "tv", "name": "News", "runtime": "1m"}),
            value
        );
    }
}
