//! Minimal SVG document builder for chart output.
//!
//! Charts are emitted as plain SVG markup; no drawing library is involved.

/// Escape text content for embedding in SVG.
pub(crate) fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Color cycle for scatter series, one per keyword row.
pub(crate) const SERIES_COLORS: &[&str] = &[
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

/// Bar fill used by the frequency chart.
pub(crate) const BAR_COLOR: &str = "#4682b4";

/// Axis and grid line color.
pub(crate) const GRID_COLOR: &str = "#cccccc";

/// Label text color.
pub(crate) const TEXT_COLOR: &str = "#333333";

/// An SVG document under construction.
pub(crate) struct SvgDocument {
    width: u32,
    height: u32,
    body: String,
}

impl SvgDocument {
    /// Start a document with a white background.
    pub fn new(width: u32, height: u32) -> Self {
        let mut doc = Self {
            width,
            height,
            body: String::new(),
        };
        doc.body.push_str(&format!(
            "  <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            width, height
        ));
        doc
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        self.body.push_str(&format!(
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"/>\n",
            x, y, width, height, fill
        ));
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, opacity: f64) {
        self.body.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\" opacity=\"{:.2}\"/>\n",
            x1, y1, x2, y2, stroke, opacity
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, opacity: f64) {
        self.body.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" opacity=\"{:.2}\"/>\n",
            cx, cy, r, fill, opacity
        ));
    }

    /// Emit a text element. `anchor` is an SVG text-anchor value
    /// (start, middle, end).
    pub fn text(&mut self, x: f64, y: f64, content: &str, size: u32, anchor: &str, bold: bool) {
        let weight = if bold { " font-weight=\"bold\"" } else { "" };
        self.body.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"{}>{}</text>\n",
            x, y, size, TEXT_COLOR, anchor, weight, xml_escape(content)
        ));
    }

    /// Finish the document.
    pub fn render(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}
