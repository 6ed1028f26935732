//! Keyword summaries and the JSON results file.
//!
//! Derives per-keyword counts and first/last mention dates from a completed
//! analysis run. Dates are ISO strings throughout, so lexicographic min/max
//! is calendar min/max.

use crate::analyzer::{AnalysisRun, EpisodeRecord};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Summary for one keyword with at least one recorded mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub keyword: String,
    pub episode_count: usize,
    pub first_mention: String,
    pub last_mention: String,
}

/// The full results document written to `analysis_results.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub total_episodes_analyzed: usize,
    pub total_keywords_tracked: usize,
    pub keywords_found: usize,
    pub keyword_summary: Vec<KeywordSummary>,
    pub episode_details: Vec<EpisodeRecord>,
}

/// Build the keyword summary for a run.
///
/// Keywords with zero recorded dates are omitted. Ordering is descending by
/// episode count; ties keep the original keyword order (the sort is stable
/// and records are built in keyword-set order).
pub fn build_summary(run: &AnalysisRun) -> Vec<KeywordSummary> {
    let mut summary: Vec<KeywordSummary> = run
        .keywords
        .iter()
        .filter_map(|keyword| {
            let dates = run.keyword_dates.get(keyword)?;
            let first_mention = dates.iter().min()?.clone();
            let last_mention = dates.iter().max()?.clone();
            Some(KeywordSummary {
                keyword: keyword.to_string(),
                episode_count: dates.len(),
                first_mention,
                last_mention,
            })
        })
        .collect();

    summary.sort_by(|a, b| b.episode_count.cmp(&a.episode_count));
    summary
}

/// Assemble the results document for a run.
pub fn build_results(run: &AnalysisRun) -> AnalysisResults {
    let keyword_summary = build_summary(run);

    AnalysisResults {
        total_episodes_analyzed: run.episodes.len(),
        total_keywords_tracked: run.keywords.len(),
        keywords_found: keyword_summary.len(),
        keyword_summary,
        episode_details: run.episodes.clone(),
    }
}

/// Write the results document as pretty-printed JSON.
pub fn save_results(results: &AnalysisResults, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    info!("Results saved to {}", path.display());
    Ok(())
}
