use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Recording entry as reported by the EasyProxy DVR API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    /// Source url the recorder is capturing
    #[serde(default, deserialize_with = "null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub file_path: String,
    /// Raw status string, see [`RecordingStatus`] for the recognized values
    #[serde(default, deserialize_with = "null_default")]
    pub status: String,
    /// RFC 3339 start time, empty when unknown
    #[serde(default, deserialize_with = "null_default")]
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_at: Option<String>,
    /// Final length, only meaningful once the recording is finished
    #[serde(default, deserialize_with = "null_default")]
    pub duration_seconds: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub file_size_bytes: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub is_active: bool,
    /// Time captured so far, only meaningful while recording
    #[serde(default, deserialize_with = "null_default")]
    pub elapsed_seconds: f64,
}

/// Body of `GET /api/recordings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordingsResponse {
    #[serde(default, deserialize_with = "null_default")]
    pub recordings: Vec<Recording>,
}

/// Recording status values the addon knows about
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RecordingStatus {
    /// Capture in progress
    Recording,
    Completed,
    /// Stopped by the user before the source ended
    Stopped,
    /// Recorder crashed or lost the source, a partial file may exist
    Failed,
}

impl RecordingStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, RecordingStatus::Recording)
    }
}

impl std::fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordingStatus::Recording => write!(f, "recording"),
            RecordingStatus::Completed => write!(f, "completed"),
            RecordingStatus::Stopped => write!(f, "stopped"),
            RecordingStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for RecordingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recording" => Ok(RecordingStatus::Recording),
            "completed" => Ok(RecordingStatus::Completed),
            "stopped" => Ok(RecordingStatus::Stopped),
            "failed" => Ok(RecordingStatus::Failed),
            _ => Err(()),
        }
    }
}

// The DVR API sends `null` for fields it has no value for yet
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
