//! Adapter layer: Convert feed DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If the feed changes its format, only this file and dto.rs need to change.

use serde_json::Value;

use super::domain::{
    BuildError, CONTENT_TYPE_MP4, Catalog, MAX_VIDEOS, MediaRecord, RawDocument, SchemaPolicy,
    StreamType,
};
use super::dto;

/// Key of the identifier field on each entry
const ID_KEY: &str = "isrc";

/// Size hint appended to the image URL for list thumbnails
pub const THUMBNAIL_QUERY: &str = "?width=480&height=270";

const CONTENT_URL_PREFIX: &str = "http://h264-aws.vevo.com/v3/h264";
const CONTENT_URL_SUFFIX: &str = "_high_1280x720_h264_2000_aac_128.mp4";

/// Convert a fetched feed document into a catalog.
///
/// Entries past [`MAX_VIDEOS`] are ignored. Entries without an identifier are
/// skipped silently; entries with an identifier but missing another required
/// field are handled according to `policy`.
pub fn to_catalog(document: RawDocument, policy: SchemaPolicy) -> Result<Catalog, BuildError> {
    let feed: dto::VideoFeed = serde_json::from_value(Value::Object(document))
        .map_err(|_| BuildError::Schema {
            index: None,
            reason: "'videos' is not a list".to_string(),
        })?;

    let Some(entries) = feed.videos else {
        tracing::debug!("Feed has no videos list, building empty catalog");
        return Ok(Catalog::default());
    };

    if entries.len() > MAX_VIDEOS {
        tracing::info!(
            "Feed has {} entries, keeping the first {}",
            entries.len(),
            MAX_VIDEOS
        );
    }

    let mut records = Vec::with_capacity(entries.len().min(MAX_VIDEOS));
    for (index, raw) in entries.into_iter().take(MAX_VIDEOS).enumerate() {
        match to_record(index, raw) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => tracing::debug!("Skipping entry {} without identifier", index),
            Err(e) => match policy {
                SchemaPolicy::Abort => return Err(e),
                SchemaPolicy::Skip => tracing::warn!("Skipping entry: {}", e),
            },
        }
    }

    Ok(Catalog::new(records))
}

/// Convert one raw entry. `Ok(None)` means the entry has no identifier.
fn to_record(index: usize, raw: Value) -> Result<Option<MediaRecord>, BuildError> {
    if !has_identifier(&raw) {
        return Ok(None);
    }

    let entry: dto::VideoEntry = serde_json::from_value(raw).map_err(|e| BuildError::Schema {
        index: Some(index),
        reason: e.to_string(),
    })?;

    let id = entry.isrc.unwrap_or_default();
    // Required, but nothing downstream uses it
    if entry.release_date.is_none() {
        return Err(BuildError::missing(index, "releaseDate"));
    }
    let image_url = entry
        .thumbnail_url
        .ok_or_else(|| BuildError::missing(index, "thumbnailUrl"))?;
    let title = entry
        .title
        .ok_or_else(|| BuildError::missing(index, "title"))?;
    let artists = entry
        .artists
        .ok_or_else(|| BuildError::missing(index, "artists"))?;
    let names = artists
        .into_iter()
        .map(|a| a.name.ok_or_else(|| BuildError::missing(index, "artists.name")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(MediaRecord {
        content_url: derive_content_url(&id),
        thumbnail_url: format!("{}{}", image_url, THUMBNAIL_QUERY),
        image_url,
        title,
        studio: String::new(),
        artist: join_artist_names(&names),
        content_type: CONTENT_TYPE_MP4.to_string(),
        stream_type: StreamType::Buffered,
        id,
    }))
}

/// An entry is usable only when it is an object with a non-empty identifier.
///
/// A non-string identifier counts as present so the type error surfaces as a
/// schema failure instead of a silent skip.
fn has_identifier(raw: &Value) -> bool {
    match raw.get(ID_KEY) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Playable MP4 URL for a video identifier.
///
/// The upper-cased identifier names the directory and the lower-cased one the
/// file. An empty identifier yields an empty string.
pub fn derive_content_url(id: &str) -> String {
    if id.is_empty() {
        return String::new();
    }

    let url = format!(
        "{}/{}/{}{}",
        CONTENT_URL_PREFIX,
        id.to_uppercase(),
        id.to_lowercase(),
        CONTENT_URL_SUFFIX
    );
    tracing::debug!("Derived content URL: {}", url);
    url
}

/// Join artist names for display.
///
/// Three or more names read "A, B, and C". Two names are concatenated as
/// "A" + "and B" with nothing in between.
pub fn join_artist_names<S: AsRef<str>>(names: &[S]) -> String {
    let count = names.len();
    let mut result = String::new();

    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if count > 1 && i == count - 1 {
            result.push_str("and ");
            result.push_str(name);
        } else {
            result.push_str(name);
            if count > 2 {
                result.push_str(", ");
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{feed_document, sample_entry};
    use serde_json::json;

    #[test]
    fn test_content_url_upper_then_lower() {
        let url = derive_content_url("abc123");

        assert_eq!(
            url,
            "http://h264-aws.vevo.com/v3/h264/ABC123/abc123_high_1280x720_h264_2000_aac_128.mp4"
        );
        let upper = url.find("ABC123").unwrap();
        let lower = url.find("abc123").unwrap();
        assert!(upper < lower);
    }

    #[test]
    fn test_content_url_mixed_case_input() {
        let url = derive_content_url("UsUv7");
        assert!(url.contains("/USUV7/usuv7_high"));
    }

    #[test]
    fn test_content_url_empty() {
        assert_eq!(derive_content_url(""), "");
    }

    #[test]
    fn test_join_no_artists() {
        let names: [&str; 0] = [];
        assert_eq!(join_artist_names(&names), "");
    }

    #[test]
    fn test_join_single_artist() {
        assert_eq!(join_artist_names(&["Queen"]), "Queen");
    }

    #[test]
    fn test_join_two_artists_has_no_separator() {
        // Suspected defect kept for compatibility: no ", " or " " before "and".
        assert_eq!(join_artist_names(&["A", "B"]), "Aand B");
    }

    #[test]
    fn test_join_three_artists() {
        assert_eq!(join_artist_names(&["A", "B", "C"]), "A, B, and C");
    }

    #[test]
    fn test_join_four_artists() {
        assert_eq!(join_artist_names(&["A", "B", "C", "D"]), "A, B, C, and D");
    }

    #[test]
    fn test_record_fields() {
        let doc = feed_document(vec![sample_entry("usuv71300001")]);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();

        assert_eq!(catalog.len(), 1);
        let record = catalog.get(0).unwrap();
        assert_eq!(record.id, "usuv71300001");
        assert_eq!(record.title, "Video usuv71300001");
        assert_eq!(record.studio, "");
        assert_eq!(record.artist, "Artist usuv71300001");
        assert_eq!(record.image_url, "http://img.example.com/usuv71300001.jpg");
        assert_eq!(
            record.thumbnail_url,
            "http://img.example.com/usuv71300001.jpg?width=480&height=270"
        );
        assert_eq!(record.content_url, derive_content_url("usuv71300001"));
        assert_eq!(record.content_type, "video/mp4");
        assert_eq!(record.stream_type, StreamType::Buffered);
    }

    #[test]
    fn test_missing_videos_key_is_empty_catalog() {
        let doc = json!({ "other": [] }).as_object().unwrap().clone();

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_videos_not_a_list() {
        let doc = json!({ "videos": { "isrc": "A" } }).as_object().unwrap().clone();

        let result = to_catalog(doc, SchemaPolicy::Skip);
        assert!(matches!(result, Err(BuildError::Schema { index: None, .. })));
    }

    #[test]
    fn test_videos_string_is_schema_error() {
        let doc = json!({ "videos": "nope" }).as_object().unwrap().clone();

        let err = to_catalog(doc, SchemaPolicy::Abort).unwrap_err();
        assert!(matches!(err, BuildError::Schema { index: None, .. }));
        assert!(err.to_string().contains("videos"));
    }

    #[test]
    fn test_empty_and_missing_identifiers_skipped() {
        let mut no_id = sample_entry("x");
        no_id.as_object_mut().unwrap().remove("isrc");
        let mut empty_id = sample_entry("x");
        empty_id["isrc"] = json!("");
        let mut null_id = sample_entry("x");
        null_id["isrc"] = Value::Null;

        let doc = feed_document(vec![
            sample_entry("a"),
            no_id,
            empty_id,
            null_id,
            json!("not an object"),
            sample_entry("b"),
        ]);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_identifiers_kept_in_order() {
        let mut second = sample_entry("dup");
        second["title"] = json!("Second");
        let doc = feed_document(vec![sample_entry("dup"), second]);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().title, "Second");
    }

    #[test]
    fn test_missing_title_aborts() {
        let mut bad = sample_entry("bad");
        bad.as_object_mut().unwrap().remove("title");
        let doc = feed_document(vec![sample_entry("a"), bad]);

        let err = to_catalog(doc, SchemaPolicy::Abort).unwrap_err();
        assert_eq!(err, BuildError::missing(1, "title"));
    }

    #[test]
    fn test_missing_release_date_aborts() {
        let mut bad = sample_entry("bad");
        bad.as_object_mut().unwrap().remove("releaseDate");
        let doc = feed_document(vec![bad]);

        let err = to_catalog(doc, SchemaPolicy::Abort).unwrap_err();
        assert_eq!(err, BuildError::missing(0, "releaseDate"));
    }

    #[test]
    fn test_missing_artist_name_aborts() {
        let mut bad = sample_entry("bad");
        bad["artists"] = json!([{ "name": "Ok" }, { "id": 7 }]);
        let doc = feed_document(vec![bad]);

        let err = to_catalog(doc, SchemaPolicy::Abort).unwrap_err();
        assert_eq!(err, BuildError::missing(0, "artists.name"));
    }

    #[test]
    fn test_wrong_identifier_type_is_schema_error() {
        let mut bad = sample_entry("bad");
        bad["isrc"] = json!(12345);
        let doc = feed_document(vec![bad]);

        let err = to_catalog(doc, SchemaPolicy::Abort).unwrap_err();
        assert!(matches!(err, BuildError::Schema { index: Some(0), .. }));
    }

    #[test]
    fn test_skip_policy_drops_malformed_entries() {
        let mut bad = sample_entry("bad");
        bad.as_object_mut().unwrap().remove("thumbnailUrl");
        let doc = feed_document(vec![sample_entry("a"), bad, sample_entry("b")]);

        let catalog = to_catalog(doc, SchemaPolicy::Skip).unwrap();
        let ids: Vec<_> = catalog.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_caps_at_max_videos() {
        let entries = (0..205).map(|i| sample_entry(&format!("id{}", i))).collect();
        let doc = feed_document(entries);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();

        assert_eq!(catalog.len(), MAX_VIDEOS);
        assert_eq!(catalog.get(199).unwrap().id, "id199");
        assert_eq!(catalog.find_by_id("id200").count(), 0);
    }

    #[test]
    fn test_entries_past_cap_are_not_validated() {
        let mut entries: Vec<Value> = (0..MAX_VIDEOS)
            .map(|i| sample_entry(&format!("id{}", i)))
            .collect();
        entries.push(json!({ "isrc": "broken" }));
        let doc = feed_document(entries);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();
        assert_eq!(catalog.len(), MAX_VIDEOS);
    }

    #[test]
    fn test_skipped_entries_count_against_cap() {
        let mut entries = vec![json!({ "isrc": "" })];
        entries.extend((0..MAX_VIDEOS).map(|i| sample_entry(&format!("id{}", i))));
        let doc = feed_document(entries);

        let catalog = to_catalog(doc, SchemaPolicy::Abort).unwrap();
        assert_eq!(catalog.len(), MAX_VIDEOS - 1);
    }
}
