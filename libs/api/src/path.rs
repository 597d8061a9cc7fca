use serde::Serialize;

pub const MANIFEST: &str = "/manifest.json";

// DVR API
pub const RECORDINGS: &str = "/api/recordings";

pub fn recording_stream(id: &str) -> String {
    format!("/api/recordings/{}/stream", urlencoding::encode(id))
}
pub fn recording_delete(id: &str) -> String {
    format!("/api/recordings/{}/delete", urlencoding::encode(id))
}
pub fn record_stop(id: &str) -> String {
    format!("/record/stop/{}", urlencoding::encode(id))
}

// Addon protocol
pub fn catalog(kind: &str, catalog: &str) -> String {
    format!("/catalog/{}/{}.json", kind, catalog)
}
pub fn catalog_search(kind: &str, catalog: &str, query: &str) -> String {
    format!(
        "/catalog/{}/{}/search={}.json",
        kind,
        catalog,
        urlencoding::encode(query)
    )
}
pub fn meta(kind: &str, id: &str) -> String {
    format!("/meta/{}/{}.json", kind, id)
}
pub fn stream(kind: &str, id: &str) -> String {
    format!("/stream/{}/{}.json", kind, id)
}

/// Append `query` to `path`, leaving `path` untouched when nothing serializes
pub fn with_query<T: Serialize>(path: String, query: T) -> String {
    match serde_html_form::to_string(query) {
        Ok(query) if !query.is_empty() => format!("{}?{}", path, query),
        _ => path,
    }
}
