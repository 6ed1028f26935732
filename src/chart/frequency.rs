//! Keyword frequency chart.
//!
//! Horizontal bars for the top keywords by episode count, most frequent at
//! the top. The input is the already-sorted keyword summary.

use super::svg::{SvgDocument, BAR_COLOR, GRID_COLOR};
use crate::error::{NevnError, Result};
use crate::report::KeywordSummary;

const WIDTH: u32 = 900;
const MARGIN_LEFT: f64 = 190.0;
const MARGIN_RIGHT: f64 = 60.0;
const MARGIN_TOP: f64 = 70.0;
const MARGIN_BOTTOM: f64 = 60.0;
const ROW_HEIGHT: f64 = 32.0;
const BAR_HEIGHT: f64 = 20.0;

/// Render the frequency chart for the top `top_n` keywords.
pub fn render_frequency(summary: &[KeywordSummary], top_n: usize) -> Result<String> {
    let top: &[KeywordSummary] = &summary[..summary.len().min(top_n)];

    if top.is_empty() {
        return Err(NevnError::Chart("no keywords to chart".to_string()));
    }

    let max_count = top
        .iter()
        .map(|s| s.episode_count)
        .max()
        .unwrap_or(1)
        .max(1);

    let plot_width = WIDTH as f64 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_bottom = MARGIN_TOP + top.len() as f64 * ROW_HEIGHT;
    let height = (plot_bottom + MARGIN_BOTTOM) as u32;

    let mut doc = SvgDocument::new(WIDTH, height);
    doc.text(
        WIDTH as f64 / 2.0,
        35.0,
        "Top Keywords by Episode Count",
        18,
        "middle",
        true,
    );

    // Count axis grid lines at integer ticks.
    for tick in count_ticks(max_count) {
        let x = MARGIN_LEFT + tick as f64 / max_count as f64 * plot_width;
        doc.line(x, MARGIN_TOP, x, plot_bottom, GRID_COLOR, 0.6);
        doc.text(x, plot_bottom + 20.0, &tick.to_string(), 11, "middle", false);
    }
    doc.text(
        MARGIN_LEFT + plot_width / 2.0,
        plot_bottom + 44.0,
        "Number of Episodes",
        13,
        "middle",
        false,
    );

    for (idx, entry) in top.iter().enumerate() {
        let y = MARGIN_TOP + idx as f64 * ROW_HEIGHT + (ROW_HEIGHT - BAR_HEIGHT) / 2.0;
        let bar_width = entry.episode_count as f64 / max_count as f64 * plot_width;
        let label_y = y + BAR_HEIGHT / 2.0 + 4.0;

        doc.text(MARGIN_LEFT - 12.0, label_y, &entry.keyword, 12, "end", false);
        doc.rect(MARGIN_LEFT, y, bar_width, BAR_HEIGHT, BAR_COLOR);
        doc.text(
            MARGIN_LEFT + bar_width + 8.0,
            label_y,
            &entry.episode_count.to_string(),
            11,
            "start",
            false,
        );
    }

    Ok(doc.render())
}

/// Integer axis ticks from zero to the maximum count, at most six.
fn count_ticks(max_count: usize) -> Vec<usize> {
    if max_count <= 5 {
        return (0..=max_count).collect();
    }

    let step = max_count.div_ceil(5);
    let mut ticks: Vec<usize> = (0..=max_count).step_by(step).collect();
    if *ticks.last().unwrap_or(&0) != max_count {
        ticks.push(max_count);
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(entries: &[(&str, usize)]) -> Vec<KeywordSummary> {
        entries
            .iter()
            .map(|(keyword, count)| KeywordSummary {
                keyword: keyword.to_string(),
                episode_count: *count,
                first_mention: "2026-01-01".to_string(),
                last_mention: "2026-01-08".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_frequency_one_bar_per_keyword() {
        let svg = render_frequency(&summary(&[("Tesla", 3), ("Bitcoin", 1)]), 20).unwrap();
        // One background rect plus one bar per keyword.
        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains(">Tesla<"));
        assert!(svg.contains(">Bitcoin<"));
        assert!(svg.contains("Top Keywords by Episode Count"));
    }

    #[test]
    fn test_frequency_truncates_to_top_n() {
        let entries: Vec<(String, usize)> = (0..25).map(|i| (format!("kw{}", i), 25 - i)).collect();
        let refs: Vec<(&str, usize)> = entries.iter().map(|(k, c)| (k.as_str(), *c)).collect();
        let svg = render_frequency(&summary(&refs), 20).unwrap();

        assert!(svg.contains(">kw19<"));
        assert!(!svg.contains(">kw20<"));
    }

    #[test]
    fn test_frequency_empty_summary_is_an_error() {
        assert!(matches!(
            render_frequency(&[], 20),
            Err(NevnError::Chart(_))
        ));
    }

    #[test]
    fn test_count_ticks() {
        assert_eq!(count_ticks(3), vec![0, 1, 2, 3]);
        let ticks = count_ticks(23);
        assert_eq!(*ticks.first().unwrap(), 0);
        assert_eq!(*ticks.last().unwrap(), 23);
        assert!(ticks.len() <= 7);
    }
}
