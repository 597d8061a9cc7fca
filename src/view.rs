use chrono::DateTime;

use api::path;
use api::recorder::Recording;
use api::request::Credential;
use api::response::{MetaPreview, Stream};

use crate::recording::Lifecycle;

pub const UNKNOWN_NAME: &str = "Unknown Recording";
pub const LIVE_MARKER: &str = "🔴 ";

pub const STOP_AND_WATCH: &str = "⏹️ Stop & Watch";
pub const PLAY: &str = "▶️ Play Recording";
pub const DELETE: &str = "🗑️ Delete Recording";

/// `1h1m` from one hour upwards, `Ym` below. Zero or negative renders empty.
pub fn format_duration(seconds: f64) -> String {
    if seconds <= 0.0 {
        return String::new();
    }
    let total = seconds as i64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    if h > 0 {
        format!("{}h{}m", h, m)
    } else {
        format!("{}m", m)
    }
}

/// Binary units up to GB with one decimal. Zero or negative renders empty.
pub fn format_file_size(bytes: i64) -> String {
    if bytes <= 0 {
        return String::new();
    }
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", size, UNITS[unit])
}

/// `YYYY-MM-DD` in the timestamp's own offset, empty when unparsable
pub fn release_date(started_at: &str) -> String {
    DateTime::parse_from_rfc3339(started_at)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn to_display(recording: &Recording) -> MetaPreview {
    let size = format_file_size(recording.file_size_bytes);
    let date = release_date(&recording.started_at);
    let name = if recording.name.is_empty() {
        UNKNOWN_NAME
    } else {
        recording.name.as_str()
    };

    let (name, description, runtime) = if Lifecycle::of(recording) == Lifecycle::Active {
        let elapsed = format_duration(recording.elapsed_seconds);
        let mut description = String::from("Recording in progress...");
        if !elapsed.is_empty() {
            description.push_str(&format!("\nElapsed: {}", elapsed));
        }
        if !size.is_empty() {
            description.push_str(&format!(" | Size: {}", size));
        }
        (format!("{}{}", LIVE_MARKER, name), description, elapsed)
    } else {
        let duration = format_duration(recording.duration_seconds);
        let details = [duration.as_str(), size.as_str(), date.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();
        let mut description = format!("Status: {}", recording.status);
        if !details.is_empty() {
            description.push('\n');
            description.push_str(&details.join(" | "));
        }
        (name.to_string(), description, duration)
    };

    MetaPreview {
        id: api::item_id(&recording.id),
        kind: api::CONTENT_TYPE.to_string(),
        name,
        description,
        release_info: date,
        runtime,
        ..Default::default()
    }
}

/// Links offered for a recording. `base` is the DVR API url.
pub fn to_actions(base: &str, credential: &Credential, id: &str, is_active: bool) -> Vec<Stream> {
    let link = |p: String| format!("{}{}", base, path::with_query(p, credential));
    if is_active {
        vec![Stream {
            url: link(path::record_stop(id)),
            title: STOP_AND_WATCH.to_string(),
        }]
    } else {
        vec![
            Stream {
                url: link(path::recording_stream(id)),
                title: PLAY.to_string(),
            },
            Stream {
                url: link(path::recording_delete(id)),
                title: DELETE.to_string(),
            },
        ]
    }
}
