//! Mention timeline chart.
//!
//! One row per keyword that matched at least once, one dot per mention date.
//! Rows keep keyword-set order, matching the summary's tie-break order.

use super::svg::{SvgDocument, GRID_COLOR, SERIES_COLORS};
use crate::analyzer::AnalysisRun;
use crate::error::{NevnError, Result};
use chrono::{Duration, NaiveDate};
use tracing::warn;

const WIDTH: u32 = 1200;
const MARGIN_LEFT: f64 = 190.0;
const MARGIN_RIGHT: f64 = 40.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 70.0;
const ROW_HEIGHT: f64 = 28.0;
const DOT_RADIUS: f64 = 6.0;

/// Render the mention timeline for a run.
///
/// Fails with a chart error if no keyword has a plottable mention; callers
/// only invoke this when the run produced matches.
pub fn render_timeline(run: &AnalysisRun) -> Result<String> {
    // Active keywords in keyword-set order, with parsed mention dates.
    let rows: Vec<(&str, Vec<NaiveDate>)> = run
        .keywords
        .iter()
        .filter_map(|keyword| {
            let dates = run.keyword_dates.get(keyword)?;
            let parsed = parse_mention_dates(keyword, dates);
            if parsed.is_empty() {
                None
            } else {
                Some((keyword, parsed))
            }
        })
        .collect();

    if rows.is_empty() {
        return Err(NevnError::Chart(
            "no keyword mentions with plottable dates".to_string(),
        ));
    }

    let min_date = rows
        .iter()
        .flat_map(|(_, dates)| dates.iter())
        .min()
        .copied()
        .ok_or_else(|| NevnError::Chart("empty date range".to_string()))?;
    let max_date = rows
        .iter()
        .flat_map(|(_, dates)| dates.iter())
        .max()
        .copied()
        .ok_or_else(|| NevnError::Chart("empty date range".to_string()))?;

    let span_days = (max_date - min_date).num_days();
    let plot_width = WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let height = (MARGIN_TOP + rows.len() as f64 * ROW_HEIGHT + MARGIN_BOTTOM) as u32;
    let plot_bottom = MARGIN_TOP + rows.len() as f64 * ROW_HEIGHT;

    let x_for = |date: NaiveDate| -> f64 {
        if span_days == 0 {
            MARGIN_LEFT + plot_width / 2.0
        } else {
            MARGIN_LEFT + (date - min_date).num_days() as f64 / span_days as f64 * plot_width
        }
    };

    let mut doc = SvgDocument::new(WIDTH, height);
    doc.text(
        WIDTH as f64 / 2.0,
        35.0,
        "Keyword Mentions Over Time",
        18,
        "middle",
        true,
    );

    // Date axis ticks with vertical grid lines.
    for tick in date_ticks(min_date, max_date) {
        let x = x_for(tick);
        doc.line(x, MARGIN_TOP, x, plot_bottom, GRID_COLOR, 0.6);
        doc.text(
            x,
            plot_bottom + 22.0,
            &tick.format("%Y-%m-%d").to_string(),
            11,
            "middle",
            false,
        );
    }
    doc.text(
        MARGIN_LEFT + plot_width / 2.0,
        plot_bottom + 48.0,
        "Episode Date",
        13,
        "middle",
        false,
    );

    // One row per active keyword.
    for (idx, (keyword, dates)) in rows.iter().enumerate() {
        let y = MARGIN_TOP + idx as f64 * ROW_HEIGHT + ROW_HEIGHT / 2.0;
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];

        doc.text(MARGIN_LEFT - 12.0, y + 4.0, keyword, 12, "end", false);
        for date in dates {
            doc.circle(x_for(*date), y, DOT_RADIUS, color, 0.6);
        }
    }

    Ok(doc.render())
}

/// Parse ISO mention dates, skipping anything unparseable with a warning.
///
/// The data model never validated dates (positional slicing only), so an
/// impossible date like 2025-02-31 can reach this point.
fn parse_mention_dates(keyword: &str, dates: &[String]) -> Vec<NaiveDate> {
    dates
        .iter()
        .filter_map(|raw| match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warn!("Skipping unplottable date '{}' for keyword '{}'", raw, keyword);
                None
            }
        })
        .collect()
}

/// Up to six evenly spaced tick dates spanning the range.
fn date_ticks(min: NaiveDate, max: NaiveDate) -> Vec<NaiveDate> {
    let span = (max - min).num_days();
    if span == 0 {
        return vec![min];
    }

    let count = 6.min(span + 1);
    (0..count)
        .map(|i| min + Duration::days(span * i / (count - 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalysisRun;
    use crate::matcher::KeywordSet;
    use std::collections::HashMap;

    fn run_with(keywords: &[&str], dates: &[(&str, &[&str])]) -> AnalysisRun {
        AnalysisRun {
            keywords: KeywordSet::new(keywords.iter().map(|k| k.to_string()).collect()),
            keyword_dates: dates
                .iter()
                .map(|(k, ds)| (k.to_string(), ds.iter().map(|d| d.to_string()).collect()))
                .collect::<HashMap<_, _>>(),
            episodes: vec![],
        }
    }

    #[test]
    fn test_timeline_draws_one_dot_per_mention() {
        let run = run_with(
            &["Tesla", "Bitcoin"],
            &[
                ("Tesla", &["2026-01-01", "2026-01-08"]),
                ("Bitcoin", &["2026-01-01"]),
            ],
        );

        let svg = render_timeline(&run).unwrap();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(">Tesla<"));
        assert!(svg.contains(">Bitcoin<"));
        assert!(svg.contains("Keyword Mentions Over Time"));
    }

    #[test]
    fn test_timeline_single_date_run() {
        let run = run_with(&["Tesla"], &[("Tesla", &["2026-01-01"])]);
        let svg = render_timeline(&run).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("2026-01-01"));
    }

    #[test]
    fn test_timeline_skips_unparseable_dates() {
        let run = run_with(
            &["Tesla"],
            &[("Tesla", &["2026-01-01", "2025-02-31"])],
        );
        let svg = render_timeline(&run).unwrap();
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_timeline_errors_when_nothing_plottable() {
        let run = run_with(&["Tesla"], &[]);
        assert!(matches!(render_timeline(&run), Err(NevnError::Chart(_))));

        let run = run_with(&["Tesla"], &[("Tesla", &["2025-02-31"])]);
        assert!(matches!(render_timeline(&run), Err(NevnError::Chart(_))));
    }

    #[test]
    fn test_timeline_escapes_keyword_labels() {
        let run = run_with(&["AT&T"], &[("AT&T", &["2026-01-01"])]);
        let svg = render_timeline(&run).unwrap();
        assert!(svg.contains("AT&amp;T"));
    }

    #[test]
    fn test_date_ticks_span_range() {
        let min = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let max = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let ticks = date_ticks(min, max);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], min);
        assert_eq!(*ticks.last().unwrap(), max);

        assert_eq!(date_ticks(min, min), vec![min]);
    }
}
