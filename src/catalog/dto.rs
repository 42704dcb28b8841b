//! Video feed Data Transfer Objects
//!
//! These types match what the feed document contains.
//! DO NOT use these types outside the catalog module - convert to domain types.
//!
//! Expected shape:
//!
//! ```json
//! { "videos": [ { "isrc": "...", "releaseDate": "...", "thumbnailUrl": "...",
//!                 "title": "...", "artists": [ { "name": "..." } ] } ] }
//! ```
//!
//! Every field is optional here. Presence rules live in the adapter, so a
//! single malformed entry can be skipped or reported without failing the
//! whole document.

use serde::{Deserialize, Serialize};

/// Top-level feed document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoFeed {
    /// Raw entries, decoded one at a time by the adapter
    pub videos: Option<Vec<serde_json::Value>>,
}

/// One video entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    /// International Standard Recording Code, used as the identifier
    pub isrc: Option<String>,
    /// Release date as published (free-form)
    pub release_date: Option<String>,
    /// Full-size image URL
    pub thumbnail_url: Option<String>,
    pub title: Option<String>,
    pub artists: Option<Vec<ArtistEntry>>,
}

/// Artist credit on a video
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistEntry {
    pub name: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the feed contains.
// ============================================================================
