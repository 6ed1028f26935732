//! Videos command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::transcript::YoutubeTranscriptSource;
use anyhow::Result;

/// Run the videos command: build a video list file from a channel/playlist URL.
pub async fn run_videos(
    source_url: &str,
    output: &str,
    limit: Option<usize>,
    settings: Settings,
) -> Result<()> {
    let source = YoutubeTranscriptSource::new(&settings.transcript);

    let spinner = Output::spinner("Fetching video list...");
    let listings = source.list_videos(source_url, limit).await?;
    spinner.finish_and_clear();

    if listings.is_empty() {
        Output::warning("No videos found for that URL");
        return Ok(());
    }

    let dated = listings.iter().filter(|l| l.upload_date.is_some()).count();

    let json = serde_json::to_string_pretty(&listings)?;
    std::fs::write(output, json)?;

    Output::success(&format!("Saved {} videos to {}", listings.len(), output));
    if dated < listings.len() {
        // Flat playlist listings often omit upload dates; those entries are
        // dropped by 'nevn analyze'.
        Output::warning(&format!(
            "{} of {} entries carry an upload date and will be analyzed",
            dated,
            listings.len()
        ));
    }
    Output::info(&format!("Next: nevn analyze {}", output));

    Ok(())
}
