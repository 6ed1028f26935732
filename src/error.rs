//! Error types for Nevn.

use thiserror::Error;

/// Library-level error type for Nevn operations.
#[derive(Error, Debug)]
pub enum NevnError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Video list error: {0}")]
    VideoList(String),

    #[error("Transcript fetch failed: {0}")]
    Transcript(String),

    #[error("No transcript available for {0}")]
    TranscriptUnavailable(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Nevn operations.
pub type Result<T> = std::result::Result<T, NevnError>;
