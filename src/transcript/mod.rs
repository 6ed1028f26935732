//! Transcript source abstraction for Nevn.
//!
//! Provides a trait-based interface for fetching episode transcripts, with a
//! YouTube captions implementation backed by yt-dlp.

mod youtube;

pub use youtube::{VideoListing, YoutubeTranscriptSource};

use crate::error::Result;
use async_trait::async_trait;

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the full transcript text for a video.
    ///
    /// Returns the spoken content as one plain-text string. A video with no
    /// available captions is an error (`TranscriptUnavailable`); callers
    /// treat it as a skip, not a failure of the run.
    async fn fetch_transcript(&self, video_id: &str) -> Result<String>;
}
