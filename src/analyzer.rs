//! Episode analysis and mention aggregation.
//!
//! The analyzer walks episodes one at a time in list order, fetches each
//! transcript, and accumulates which keywords appeared when. Accumulation is
//! append-only: the same episode analyzed twice is recorded twice (retried
//! fetches are the caller's concern, deliberately not deduplicated here).

use crate::error::Result;
use crate::matcher::KeywordSet;
use crate::transcript::TranscriptSource;
use crate::video_list::VideoEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Record of one analyzed episode with at least one keyword match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    pub video_id: String,
    pub date: String,
    pub keywords_found: Vec<String>,
}

/// What happened to a single episode. The caller decides how to log each
/// case and always continues with the next episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeOutcome {
    /// Keywords were found; state was updated.
    Matched(usize),
    /// Transcript fetched, but no tracked keyword appeared. No state change.
    NoMatches,
    /// Transcript was empty. No match attempted, no state change.
    NoTranscript,
}

/// Aggregates keyword mentions across episodes.
pub struct Analyzer {
    source: Arc<dyn TranscriptSource>,
    keywords: KeywordSet,
    keyword_dates: HashMap<String, Vec<String>>,
    episodes: Vec<EpisodeRecord>,
}

impl Analyzer {
    pub fn new(source: Arc<dyn TranscriptSource>, keywords: KeywordSet) -> Self {
        Self {
            source,
            keywords,
            keyword_dates: HashMap::new(),
            episodes: Vec::new(),
        }
    }

    /// The keyword set for this run.
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Fetch and analyze a single episode.
    ///
    /// A fetch failure is returned as an error so the caller can log it and
    /// move on; nothing is recorded for that episode.
    #[instrument(skip(self), fields(video_id = %video.id))]
    pub async fn analyze_episode(&mut self, video: &VideoEntry) -> Result<EpisodeOutcome> {
        let transcript = self.source.fetch_transcript(&video.id).await?;
        Ok(self.record_episode(video, &transcript))
    }

    /// Match a transcript against the keyword set and record the results.
    ///
    /// Split out from [`analyze_episode`](Self::analyze_episode) so the
    /// aggregation contract is testable without a transcript source.
    pub fn record_episode(&mut self, video: &VideoEntry, transcript: &str) -> EpisodeOutcome {
        if transcript.trim().is_empty() {
            debug!("Empty transcript, skipping");
            return EpisodeOutcome::NoTranscript;
        }

        let keywords_found = self.keywords.matches(transcript);

        if keywords_found.is_empty() {
            return EpisodeOutcome::NoMatches;
        }

        for keyword in &keywords_found {
            self.keyword_dates
                .entry(keyword.clone())
                .or_default()
                .push(video.date.clone());
        }

        let count = keywords_found.len();
        self.episodes.push(EpisodeRecord {
            video_id: video.id.clone(),
            date: video.date.clone(),
            keywords_found,
        });

        EpisodeOutcome::Matched(count)
    }

    /// Freeze the accumulated state. After this, nothing mutates.
    pub fn into_run(self) -> AnalysisRun {
        AnalysisRun {
            keywords: self.keywords,
            keyword_dates: self.keyword_dates,
            episodes: self.episodes,
        }
    }
}

/// The completed, read-only result of an analysis run.
#[derive(Debug)]
pub struct AnalysisRun {
    /// The keyword set the run tracked.
    pub keywords: KeywordSet,
    /// Dates on which each keyword was observed, one entry per matching
    /// episode. Only keywords with at least one match have an entry.
    pub keyword_dates: HashMap<String, Vec<String>>,
    /// Episodes with at least one match, in processing order.
    pub episodes: Vec<EpisodeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NevnError;
    use async_trait::async_trait;

    /// Transcript source backed by a fixed map, for testing the pipeline.
    struct FakeSource {
        transcripts: HashMap<String, String>,
    }

    impl FakeSource {
        fn new(entries: &[(&str, &str)]) -> Arc<Self> {
            Arc::new(Self {
                transcripts: entries
                    .iter()
                    .map(|(id, text)| (id.to_string(), text.to_string()))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl TranscriptSource for FakeSource {
        async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
            self.transcripts
                .get(video_id)
                .cloned()
                .ok_or_else(|| NevnError::TranscriptUnavailable(video_id.to_string()))
        }
    }

    fn keywords(list: &[&str]) -> KeywordSet {
        KeywordSet::new(list.iter().map(|k| k.to_string()).collect())
    }

    fn entry(id: &str, date: &str) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            date: date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_two_episode_scenario() {
        let source = FakeSource::new(&[
            ("ep1", "today Bitcoin rallied and Tesla shipped cars"),
            ("ep2", "another Tesla quarter"),
        ]);
        let mut analyzer = Analyzer::new(source, keywords(&["Bitcoin", "Tesla"]));

        let o1 = analyzer
            .analyze_episode(&entry("ep1", "2026-01-01"))
            .await
            .unwrap();
        let o2 = analyzer
            .analyze_episode(&entry("ep2", "2026-01-08"))
            .await
            .unwrap();

        assert_eq!(o1, EpisodeOutcome::Matched(2));
        assert_eq!(o2, EpisodeOutcome::Matched(1));

        let run = analyzer.into_run();
        assert_eq!(
            run.keyword_dates["Tesla"],
            vec!["2026-01-01".to_string(), "2026-01-08".to_string()]
        );
        assert_eq!(run.keyword_dates["Bitcoin"], vec!["2026-01-01".to_string()]);
        assert_eq!(run.episodes.len(), 2);
        assert_eq!(run.episodes[0].keywords_found, vec!["Bitcoin", "Tesla"]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_an_error_and_no_state_change() {
        let source = FakeSource::new(&[]);
        let mut analyzer = Analyzer::new(source, keywords(&["Tesla"]));

        let result = analyzer.analyze_episode(&entry("gone", "2026-01-01")).await;
        assert!(matches!(result, Err(NevnError::TranscriptUnavailable(_))));

        let run = analyzer.into_run();
        assert!(run.keyword_dates.is_empty());
        assert!(run.episodes.is_empty());
    }

    #[tokio::test]
    async fn test_empty_transcript_is_skipped() {
        let source = FakeSource::new(&[("ep1", "   ")]);
        let mut analyzer = Analyzer::new(source, keywords(&["Tesla"]));

        let outcome = analyzer
            .analyze_episode(&entry("ep1", "2026-01-01"))
            .await
            .unwrap();
        assert_eq!(outcome, EpisodeOutcome::NoTranscript);

        let run = analyzer.into_run();
        assert!(run.episodes.is_empty());
    }

    #[test]
    fn test_zero_matches_leaves_state_untouched() {
        let source = FakeSource::new(&[]);
        let mut analyzer = Analyzer::new(source, keywords(&["Tesla"]));

        let outcome =
            analyzer.record_episode(&entry("ep1", "2026-01-01"), "an episode about gardening");
        assert_eq!(outcome, EpisodeOutcome::NoMatches);

        let run = analyzer.into_run();
        assert!(run.keyword_dates.is_empty());
        assert!(run.episodes.is_empty());
    }

    #[test]
    fn test_reanalyzing_same_episode_duplicates_entries() {
        // No dedup by video id: a retried episode is recorded twice.
        let source = FakeSource::new(&[]);
        let mut analyzer = Analyzer::new(source, keywords(&["Tesla"]));

        let video = entry("ep1", "2026-01-01");
        analyzer.record_episode(&video, "tesla tesla tesla");
        analyzer.record_episode(&video, "tesla tesla tesla");

        let run = analyzer.into_run();
        assert_eq!(run.keyword_dates["Tesla"].len(), 2);
        assert_eq!(run.episodes.len(), 2);
    }
}
