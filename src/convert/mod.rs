//! Text to HTML conversion
//!
//! - `html`: the deterministic rule-based converter and the document shell
//! - `stats`: character/line/word/paragraph counts for the preview
//! - `service`: conversion strategy with an optional external generator and
//!   a silent fallback to the rule-based converter

mod html;
mod service;
mod stats;

pub use html::{
    convert_text_to_html, convert_text_to_html_with_title, render_fragment, wrap_document,
    Document, DEFAULT_TITLE,
};
pub use service::{
    Conversion, ConversionEngine, ConversionMode, ConversionService, FragmentGenerator,
};
pub use stats::TextStats;
