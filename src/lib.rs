//! Nevn - Podcast Keyword Mention Tracker
//!
//! A CLI tool that tracks keyword mentions across a podcast's YouTube episodes.
//!
//! The name "Nevn" comes from the Norwegian word for "mention."
//!
//! # Overview
//!
//! Nevn allows you to:
//! - Build a video list for a channel or playlist via yt-dlp
//! - Fetch episode transcripts from YouTube captions
//! - Scan transcripts for a configurable keyword list
//! - Generate a JSON report and SVG charts of mentions over time
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management (including the tracked keyword list)
//! - `video_list` - Loading the yt-dlp-produced episode list
//! - `transcript` - Transcript source abstraction and YouTube captions
//! - `matcher` - Case-insensitive keyword matching
//! - `analyzer` - Per-episode analysis and mention aggregation
//! - `report` - Keyword summaries and the JSON results file
//! - `chart` - SVG timeline and frequency charts
//!
//! # Example
//!
//! ```rust,no_run
//! use nevn::analyzer::Analyzer;
//! use nevn::config::Settings;
//! use nevn::matcher::KeywordSet;
//! use nevn::transcript::YoutubeTranscriptSource;
//! use nevn::video_list::load_video_list;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let keywords = KeywordSet::new(settings.keywords.track.clone());
//!     let source = Arc::new(YoutubeTranscriptSource::new(&settings.transcript));
//!
//!     let videos = load_video_list(Path::new("videos.json"))?;
//!     let mut analyzer = Analyzer::new(source, keywords);
//!     for video in &videos {
//!         let _ = analyzer.analyze_episode(video).await;
//!     }
//!
//!     let run = analyzer.into_run();
//!     println!("Analyzed {} matching episodes", run.episodes.len());
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod report;
pub mod transcript;
pub mod video_list;

pub use error::{NevnError, Result};
