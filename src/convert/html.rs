use once_cell::sync::Lazy;
use regex::Regex;

/// Title used when the caller does not supply one
pub const DEFAULT_TITLE: &str = "Generated Content";

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

pub(super) static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("block separator pattern is valid"));

const BULLET_MARKER: &str = "- ";

/// A piece of raw text together with the HTML document derived from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub raw_text: String,
    pub html_output: String,
}

impl Document {
    /// Convert `raw_text` with the default title
    pub fn convert(raw_text: impl Into<String>) -> Self {
        let raw_text = raw_text.into();
        let html_output = convert_text_to_html(&raw_text);
        Self {
            raw_text,
            html_output,
        }
    }
}

/// Convert raw text into a complete HTML5 document
pub fn convert_text_to_html(text: &str) -> String {
    convert_text_to_html_with_title(text, DEFAULT_TITLE)
}

/// Convert raw text into a complete HTML5 document with the given `<title>`
pub fn convert_text_to_html_with_title(text: &str, title: &str) -> String {
    wrap_document(&render_fragment(text), title)
}

/// Render the body fragment for `text`: links, paragraphs and bullet lists.
///
/// Blocks are separated by blank lines. A block containing at least one line
/// starting with `"- "` becomes a `<ul>`; only its bullet lines are kept.
/// Every other non-blank block becomes a `<p>` with `<br>` for newlines.
pub fn render_fragment(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    let linked = linkify(&escape_html(&normalized));

    BLOCK_SEPARATOR
        .split(&linked)
        .filter_map(render_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Embed a body fragment in the fixed document shell
pub fn wrap_document(fragment: &str, title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; line-height: 1.6; margin: 2rem; color: #333; }}
        p {{ margin-bottom: 1rem; }}
        ul {{ margin-bottom: 1rem; padding-left: 2rem; }}
        li {{ margin-bottom: 0.5rem; }}
        a {{ color: #2563eb; text-decoration: underline; }}
        a:hover {{ color: #1d4ed8; }}
    </style>
</head>
<body>
{fragment}
</body>
</html>"#,
        title = escape_html(title),
        fragment = fragment,
    )
}

fn render_block(block: &str) -> Option<String> {
    if block.trim().is_empty() {
        return None;
    }

    // Non-bullet lines sharing a block with bullets are dropped
    if block.lines().any(|line| line.starts_with(BULLET_MARKER)) {
        let items = block
            .lines()
            .filter_map(|line| line.strip_prefix(BULLET_MARKER))
            .map(|item| format!("<li>{}</li>", item.trim()))
            .collect::<Vec<_>>()
            .join("\n");
        return Some(format!("<ul>\n{items}\n</ul>"));
    }

    Some(format!("<p>{}</p>", block.replace('\n', "<br>")))
}

fn linkify(text: &str) -> String {
    URL_PATTERN
        .replace_all(text, r#"<a href="$0">$0</a>"#)
        .into_owned()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
