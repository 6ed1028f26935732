//! SVG chart rendering for Nevn.
//!
//! Two charts are produced from a completed run: a per-keyword mention
//! timeline and a top-N keyword frequency bar chart. Both are emitted as
//! standalone SVG files.

mod frequency;
mod svg;
mod timeline;

pub use frequency::render_frequency;
pub use timeline::render_timeline;
