//! Visible text collection from HTML.
//!
//! Parses the document with `scraper` (html5ever underneath), which applies
//! browser error recovery, so unterminated tags and stray angle brackets
//! never fail: they just become text or get closed implicitly.

use scraper::{Html, Node};
use tracing::debug;

/// Elements whose text content is never rendered.
pub const EXCLUDED_TAGS: &[&str] = &["script", "style"];

/// Collect the visible text of `html` as an ordered list of items.
///
/// Every text node outside [`EXCLUDED_TAGS`] is split on line boundaries;
/// each line is trimmed and kept only if non-empty. Items come out in
/// document order.
pub fn collect_text_items(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let items: Vec<String> = document
        .tree
        .root()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) if !node.ancestors().any(|a| is_excluded(a.value())) => {
                Some(&**text)
            }
            _ => None,
        })
        .flat_map(|text| text.split(is_line_break))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    debug!(count = items.len(), "Collected text items");
    items
}

/// Line terminators: `\n`, `\r`, vertical tab, form feed, the file, group
/// and record separators, NEL, and the Unicode line and paragraph
/// separators. `\r\n` splits twice and leaves an empty piece, which is
/// dropped with the other blanks.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn is_excluded(node: &Node) -> bool {
    node.as_element().is_some_and(|el| {
        EXCLUDED_TAGS
            .iter()
            .any(|tag| el.name().eq_ignore_ascii_case(tag))
    })
}
