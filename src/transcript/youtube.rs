//! YouTube transcript source.
//!
//! Caption tracks are discovered with `yt-dlp --dump-json` and downloaded in
//! the `json3` format, which carries the caption text as event segments.

use super::TranscriptSource;
use crate::config::TranscriptSettings;
use crate::error::{NevnError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// YouTube transcript source using yt-dlp caption metadata.
pub struct YoutubeTranscriptSource {
    client: reqwest::Client,
    language: String,
    prefer_manual: bool,
    video_id_regex: Regex,
}

impl YoutubeTranscriptSource {
    pub fn new(settings: &TranscriptSettings) -> Self {
        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            client: reqwest::Client::new(),
            language: settings.language.clone(),
            prefer_manual: settings.prefer_manual,
            video_id_regex,
        }
    }

    /// Extract video ID from a YouTube URL or bare ID.
    pub fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// Fetch video metadata using yt-dlp.
    async fn fetch_metadata(&self, video_id: &str) -> Result<serde_json::Value> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                "--ignore-errors",
                &url,
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NevnError::ToolNotFound("yt-dlp".to_string())
                } else {
                    NevnError::Transcript(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NevnError::Transcript(format!(
                "Video {} not found or unavailable: {}",
                video_id, stderr
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json_str)
            .map_err(|e| NevnError::Transcript(format!("Failed to parse yt-dlp output: {}", e)))
    }

    /// Pick the URL of a json3 caption track from yt-dlp metadata.
    ///
    /// Manual subtitles and automatic captions both live in the metadata;
    /// which is tried first depends on `prefer_manual`.
    fn select_caption_url(&self, metadata: &serde_json::Value) -> Option<String> {
        let fields: [&str; 2] = if self.prefer_manual {
            ["subtitles", "automatic_captions"]
        } else {
            ["automatic_captions", "subtitles"]
        };

        for field in fields {
            let tracks = &metadata[field][&self.language];
            if let Some(formats) = tracks.as_array() {
                for format in formats {
                    if format["ext"].as_str() == Some("json3") {
                        if let Some(url) = format["url"].as_str() {
                            return Some(url.to_string());
                        }
                    }
                }
            }
        }

        None
    }

    /// Download a json3 caption track and join it into plain text.
    async fn download_captions(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(NevnError::Transcript(format!(
                "Caption download returned HTTP {}",
                response.status()
            )));
        }

        let track: Json3Track = response.json().await?;
        Ok(join_caption_events(&track))
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    #[instrument(skip(self), fields(video_id = %video_id))]
    async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        let video_id = self.extract_video_id(video_id).ok_or_else(|| {
            NevnError::InvalidInput(format!("Invalid YouTube video ID or URL: {}", video_id))
        })?;

        let metadata = self.fetch_metadata(&video_id).await?;

        let caption_url = self
            .select_caption_url(&metadata)
            .ok_or_else(|| NevnError::TranscriptUnavailable(video_id.clone()))?;

        debug!("Downloading captions for {}", video_id);
        self.download_captions(&caption_url).await
    }
}

/// One entry of a yt-dlp flat-playlist listing, as written to videos.json.
///
/// `upload_date` stays in yt-dlp's compact YYYYMMDD format; conversion to
/// ISO happens in the video list loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListing {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
}

impl YoutubeTranscriptSource {
    /// List videos from a channel or playlist URL via yt-dlp.
    pub async fn list_videos(
        &self,
        source: &str,
        limit: Option<usize>,
    ) -> Result<Vec<VideoListing>> {
        let mut args = vec![
            "--dump-json".to_string(),
            "--no-download".to_string(),
            "--no-warnings".to_string(),
            "--flat-playlist".to_string(),
        ];
        if let Some(l) = limit {
            args.push("--playlist-end".to_string());
            args.push(l.to_string());
        }
        args.push(source.to_string());

        let output = tokio::process::Command::new("yt-dlp")
            .args(&args)
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NevnError::ToolNotFound("yt-dlp".to_string())
                } else {
                    NevnError::VideoList(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NevnError::VideoList(format!(
                "Failed to list videos: {}",
                stderr
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut listings = Vec::new();

        for line in stdout.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Ok(json) = serde_json::from_str::<serde_json::Value>(line) {
                let id = json["id"]
                    .as_str()
                    .or_else(|| json["url"].as_str())
                    .map(|s| self.extract_video_id(s).unwrap_or_else(|| s.to_string()));

                if let Some(id) = id {
                    listings.push(VideoListing {
                        id,
                        title: json["title"].as_str().map(|s| s.to_string()),
                        upload_date: json["upload_date"].as_str().map(|s| s.to_string()),
                    });
                }
            }
        }

        Ok(listings)
    }
}

/// A json3 caption track.
#[derive(Debug, Deserialize)]
struct Json3Track {
    #[serde(default)]
    events: Vec<Json3Event>,
}

/// One caption event; non-text events carry no segments.
#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(default)]
    segs: Option<Vec<Json3Segment>>,
}

#[derive(Debug, Deserialize)]
struct Json3Segment {
    #[serde(default)]
    utf8: Option<String>,
}

/// Join caption events into one plain-text transcript.
fn join_caption_events(track: &Json3Track) -> String {
    let mut parts: Vec<String> = Vec::new();

    for event in &track.events {
        let Some(segs) = &event.segs else { continue };

        let text: String = segs
            .iter()
            .filter_map(|s| s.utf8.as_deref())
            .collect::<Vec<_>>()
            .join("");
        let text = text.trim().to_string();

        if !text.is_empty() {
            parts.push(text);
        }
    }

    parts.join(" ")
}
