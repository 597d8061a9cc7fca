pub mod manifest;
pub mod path;
pub mod recorder;
pub mod request;
pub mod response;

/// The only content type this addon serves
pub const CONTENT_TYPE: &str = "tv";
/// Catalog id announced in the manifest
pub const CATALOG_ID: &str = "dvr-recordings";
/// Prefix that turns a recording id into an addon item id
pub const ID_PREFIX: &str = "dvr:";

pub fn item_id(recording_id: &str) -> String {
    format!("{}{}", ID_PREFIX, recording_id)
}
