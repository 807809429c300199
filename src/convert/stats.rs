use super::html::BLOCK_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Simple counts shown next to the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Unicode scalar values, not bytes
    pub characters: usize,
    pub lines: usize,
    pub words: usize,
    /// Non-blank blocks separated by blank lines
    pub paragraphs: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        Self {
            characters: text.chars().count(),
            lines: text.split('\n').count(),
            words: text.split_whitespace().count(),
            paragraphs: BLOCK_SEPARATOR
                .split(&normalized)
                .filter(|block| !block.trim().is_empty())
                .count(),
        }
    }
}
