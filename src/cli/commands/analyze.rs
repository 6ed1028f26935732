//! Analyze command implementation.

use crate::analyzer::{Analyzer, EpisodeOutcome};
use crate::chart::{render_frequency, render_timeline};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::NevnError;
use crate::matcher::KeywordSet;
use crate::report;
use crate::transcript::YoutubeTranscriptSource;
use crate::video_list::load_video_list;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// Run the analyze command.
pub async fn run_analyze(
    input: &str,
    limit: Option<usize>,
    no_charts: bool,
    settings: Settings,
) -> Result<()> {
    let input_path = Path::new(input);

    if !input_path.exists() {
        print_usage_instructions(input);
        return Ok(());
    }

    let mut videos = load_video_list(input_path)?;
    if let Some(limit) = limit {
        videos.truncate(limit);
    }

    if videos.is_empty() {
        Output::warning(&format!("No valid videos found in {}", input));
        return Ok(());
    }

    let keywords = KeywordSet::new(settings.keywords.track.clone());
    if keywords.is_empty() {
        Output::warning("No keywords configured; nothing to track.");
        return Ok(());
    }

    let total = videos.len();
    Output::info(&format!(
        "Analyzing {} episodes for {} keywords...",
        total,
        keywords.len()
    ));
    println!();

    let source = Arc::new(YoutubeTranscriptSource::new(&settings.transcript));
    let mut analyzer = Analyzer::new(source, keywords);

    let mut skip_count = 0;
    let mut error_count = 0;

    for (i, video) in videos.iter().enumerate() {
        let progress = format!("[{}/{}]", i + 1, total);
        Output::info(&format!("{} Processing: {}", progress, video.date));

        match analyzer.analyze_episode(video).await {
            Ok(EpisodeOutcome::Matched(count)) => {
                Output::success(&format!("  {}: Found {} keywords", video.date, count));
            }
            Ok(EpisodeOutcome::NoMatches) => {
                Output::info("  No tracked keywords mentioned");
            }
            Ok(EpisodeOutcome::NoTranscript) => {
                Output::warning("  Empty transcript, skipped");
                skip_count += 1;
            }
            // A missing yt-dlp fails every episode the same way; bail out.
            Err(e @ NevnError::ToolNotFound(_)) => {
                Output::error(&format!("  {}", e));
                return Err(e.into());
            }
            Err(e) => {
                Output::error(&format!("  Failed: {}", e));
                error_count += 1;
            }
        }
    }

    println!();
    if skip_count > 0 || error_count > 0 {
        Output::info(&format!(
            "Done: {} episodes skipped, {} failed",
            skip_count, error_count
        ));
    }

    let run = analyzer.into_run();
    let results = report::build_results(&run);

    // Console summary
    if results.keyword_summary.is_empty() {
        Output::info("No keywords found in any episodes.");
    } else {
        Output::header("Keyword Analysis Summary");
        println!();
        for entry in &results.keyword_summary {
            Output::summary_row(
                &entry.keyword,
                entry.episode_count,
                &entry.first_mention,
                &entry.last_mention,
            );
        }
        println!();
        Output::kv("Episodes with matches", &results.total_episodes_analyzed.to_string());
        Output::kv("Keywords tracked", &results.total_keywords_tracked.to_string());
        Output::kv("Keywords found", &results.keywords_found.to_string());
        println!();
    }

    // JSON report is always written, even as an empty shell.
    let results_path = settings.results_path();
    report::save_results(&results, &results_path)?;
    Output::success(&format!("Results saved to {}", results_path.display()));

    // Charts only when something matched.
    if settings.chart.enabled && !no_charts && !results.keyword_summary.is_empty() {
        match render_timeline(&run) {
            Ok(svg) => {
                let path = settings.timeline_path();
                std::fs::write(&path, svg)?;
                Output::success(&format!("Timeline chart saved to {}", path.display()));
            }
            Err(e) => Output::warning(&format!("Timeline chart not rendered: {}", e)),
        }

        match render_frequency(&results.keyword_summary, settings.chart.top_keywords) {
            Ok(svg) => {
                let path = settings.frequency_path();
                std::fs::write(&path, svg)?;
                Output::success(&format!("Frequency chart saved to {}", path.display()));
            }
            Err(e) => Output::warning(&format!("Frequency chart not rendered: {}", e)),
        }
    }

    Ok(())
}

/// Explain how to produce the video list when the input file is missing.
fn print_usage_instructions(input: &str) {
    Output::warning(&format!("No {} file found.", input));
    println!();
    println!("To analyze a podcast:");
    println!("  1. Build a video list for its channel:");
    println!("       nevn videos 'https://www.youtube.com/@<channel>'");
    println!("  2. Run the analysis:");
    println!("       nevn analyze");
    println!();
    println!("Keywords are configured in the [keywords] section of the config file");
    println!("(see 'nevn config path').");
}
