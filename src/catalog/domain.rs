//! Internal domain models for the video catalog.
//!
//! These types are OUR types - they don't change when the feed format changes.
//! Feed entries get converted into these types in `adapter.rs`.

use serde::{Deserialize, Serialize};

/// Maximum number of feed entries considered for a catalog.
pub const MAX_VIDEOS: usize = 200;

/// Content type of every playable URL we derive.
pub const CONTENT_TYPE_MP4: &str = "video/mp4";

/// The untyped JSON object returned by the fetcher.
pub type RawDocument = serde_json::Map<String, serde_json::Value>;

/// How a media stream is delivered to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamType {
    None,
    /// Progressive download of a finite file (the only kind this crate produces)
    #[default]
    Buffered,
    Live,
}

/// A normalized, presentation-ready description of one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    /// Source identifier (ISRC); not unique across a catalog
    pub id: String,
    /// Display title
    pub title: String,
    /// Subtitle/studio line; always empty for this feed
    pub studio: String,
    /// Artist names joined for display
    pub artist: String,
    /// Playable media URL derived from the identifier
    pub content_url: String,
    /// Small image for list rows
    pub thumbnail_url: String,
    /// Full-size image
    pub image_url: String,
    pub content_type: String,
    pub stream_type: StreamType,
}

/// Ordered list of records in feed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    records: Vec<MediaRecord>,
}

impl Catalog {
    pub fn new(records: Vec<MediaRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MediaRecord] {
        &self.records
    }

    /// All records carrying the given identifier, in catalog order.
    pub fn find_by_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a MediaRecord> + 'a {
        self.records.iter().filter(move |r| r.id == id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MediaRecord;
    type IntoIter = std::slice::Iter<'a, MediaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// What to do with an entry that has an identifier but lacks another required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Fail the whole build on the first malformed entry
    #[default]
    Abort,
    /// Drop the malformed entry and keep going
    Skip,
}

/// Errors retrieving or decoding the feed document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}

/// Errors building a catalog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Catalog document unavailable: {0}")]
    Unavailable(#[from] FetchError),

    /// `index` is the offending entry, or `None` when the document itself is malformed
    #[error("{} is malformed: {reason}", schema_location(.index))]
    Schema { index: Option<usize>, reason: String },
}

impl BuildError {
    /// Schema error for an entry lacking a required field.
    pub fn missing(index: usize, field: &str) -> Self {
        Self::Schema {
            index: Some(index),
            reason: format!("missing '{}'", field),
        }
    }
}

fn schema_location(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("Entry {}", i),
        None => "Feed document".to_string(),
    }
}
