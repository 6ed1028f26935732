//! CLI module for Nevn.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Nevn - Podcast Keyword Mention Tracker
///
/// A CLI tool that tracks keyword mentions across a podcast's YouTube episodes.
/// The name "Nevn" comes from the Norwegian word for "mention."
#[derive(Parser, Debug)]
#[command(name = "nevn")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze episodes from a video list for keyword mentions
    Analyze {
        /// Path to the yt-dlp video list JSON file
        #[arg(default_value = "videos.json")]
        input: String,

        /// Maximum number of episodes to analyze (default: all)
        #[arg(long)]
        limit: Option<usize>,

        /// Skip chart rendering, write only the JSON report
        #[arg(long)]
        no_charts: bool,
    },

    /// Build a video list for a channel or playlist URL
    Videos {
        /// YouTube channel or playlist URL
        source: String,

        /// Output file for the video list
        #[arg(short, long, default_value = "videos.json")]
        output: String,

        /// Maximum number of videos to list (default: all)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Initialize Nevn and verify system requirements
    Init,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
