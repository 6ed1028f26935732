//! Video list loading.
//!
//! Reads the JSON array produced by yt-dlp (`nevn videos` or
//! `yt-dlp -J --flat-playlist`) and converts it into episode entries ready
//! for analysis. Entries missing an id or upload date are dropped rather
//! than reported as errors.

use crate::error::{NevnError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One episode to analyze: a video id and its publish date (ISO format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub date: String,
}

/// Raw entry as produced by yt-dlp. Only the fields we use.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    upload_date: Option<String>,
}

/// Load a video list from a yt-dlp JSON file.
///
/// The file must contain a JSON array of objects with at least `id` and
/// `upload_date` fields. Malformed entries are silently dropped; the order
/// of surviving entries is preserved.
pub fn load_video_list(path: &Path) -> Result<Vec<VideoEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        NevnError::VideoList(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let raw: Vec<RawEntry> = serde_json::from_str(&content).map_err(|e| {
        NevnError::VideoList(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    let total = raw.len();
    let videos: Vec<VideoEntry> = raw
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id?;
            let date = format_upload_date(&entry.upload_date?)?;
            Some(VideoEntry { id, date })
        })
        .collect();

    if videos.len() < total {
        debug!("Dropped {} malformed entries from video list", total - videos.len());
    }

    Ok(videos)
}

/// Convert a yt-dlp compact date (YYYYMMDD) to ISO format (YYYY-MM-DD).
///
/// Pure positional slicing: the date is not validated against a calendar,
/// so "20250231" converts without complaint. Anything that is not exactly
/// eight ASCII digits is treated as malformed.
pub fn format_upload_date(raw: &str) -> Option<String> {
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..8]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_upload_date() {
        assert_eq!(format_upload_date("20260115"), Some("2026-01-15".to_string()));
        assert_eq!(format_upload_date("19991231"), Some("1999-12-31".to_string()));
    }

    #[test]
    fn test_format_upload_date_no_calendar_validation() {
        // Positional slicing only; impossible dates pass through.
        assert_eq!(format_upload_date("20250231"), Some("2025-02-31".to_string()));
    }

    #[test]
    fn test_format_upload_date_malformed() {
        assert_eq!(format_upload_date(""), None);
        assert_eq!(format_upload_date("2026011"), None);
        assert_eq!(format_upload_date("202601155"), None);
        assert_eq!(format_upload_date("2026011å"), None);
    }

    #[test]
    fn test_format_upload_date_rejects_non_digits() {
        // Eight characters is not enough; every position must be a digit.
        assert_eq!(format_upload_date("Jan 2026"), None);
        assert_eq!(format_upload_date("2026-1-5"), None);
        assert_eq!(format_upload_date("2026011x"), None);
    }

    #[test]
    fn test_load_video_list_drops_malformed_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "abc123def45", "upload_date": "20260115", "title": "Episode 1"}},
                {{"id": "missing_date"}},
                {{"upload_date": "20260122"}},
                {{"id": "bad_date_fmt", "upload_date": "Jan 2026"}},
                {{"id": "xyz987uvw65", "upload_date": "20260129"}}
            ]"#
        )
        .unwrap();

        let videos = load_video_list(file.path()).unwrap();
        assert_eq!(
            videos,
            vec![
                VideoEntry { id: "abc123def45".to_string(), date: "2026-01-15".to_string() },
                VideoEntry { id: "xyz987uvw65".to_string(), date: "2026-01-29".to_string() },
            ]
        );
    }

    #[test]
    fn test_load_video_list_missing_file() {
        let result = load_video_list(Path::new("/nonexistent/videos.json"));
        assert!(matches!(result, Err(NevnError::VideoList(_))));
    }

    #[test]
    fn test_load_video_list_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let result = load_video_list(file.path());
        assert!(matches!(result, Err(NevnError::VideoList(_))));
    }
}
