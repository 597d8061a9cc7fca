use api::recorder::{Recording, RecordingStatus};

/// Display state of a recording, derived from `is_active`, `status`
/// and `file_size_bytes` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Capture in progress
    Active,
    /// Finished with a playable file, listed in the catalog
    Eligible,
    /// Hidden from the catalog, still reachable through meta and stream
    Ineligible,
}

impl Lifecycle {
    pub fn of(recording: &Recording) -> Self {
        match recording.status.parse::<RecordingStatus>() {
            Ok(RecordingStatus::Recording) if recording.is_active => Lifecycle::Active,
            Ok(status) if status.is_finished() && recording.file_size_bytes > 0 => {
                Lifecycle::Eligible
            }
            _ => Lifecycle::Ineligible,
        }
    }
}

#[derive(Debug, Default)]
pub struct Classified {
    pub active: Vec<Recording>,
    pub eligible: Vec<Recording>,
}

/// Case-insensitive substring match on the name. An empty query matches everything.
pub fn matches_search(recording: &Recording, query: &str) -> bool {
    query.is_empty()
        || recording
            .name
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// Split records into catalog buckets, keeping input order inside each bucket.
pub fn classify(records: Vec<Recording>, search: Option<&str>) -> Classified {
    let mut classified = Classified::default();
    for recording in records {
        if let Some(query) = search {
            if !matches_search(&recording, query) {
                continue;
            }
        }
        match Lifecycle::of(&recording) {
            Lifecycle::Active => classified.active.push(recording),
            Lifecycle::Eligible => classified.eligible.push(recording),
            Lifecycle::Ineligible => {}
        }
    }
    classified
}

/// Newest first by `started_at`. ISO-8601 strings compare in time order,
/// ties and missing values keep their input order.
pub fn order(mut records: Vec<Recording>) -> Vec<Recording> {
    records.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    records
}

/// Catalog listing: in-progress recordings first, then finished ones.
pub fn catalog(records: Vec<Recording>, search: Option<&str>) -> Vec<Recording> {
    let Classified { active, eligible } = classify(records, search);
    let mut result = order(active);
    result.extend(order(eligible));
    result
}
