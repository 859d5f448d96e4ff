//! Coordinate triple extraction.
//!
//! Published documents carry the art as a table whose cells flatten into a
//! run of `x, glyph, y` text items, usually after a header row and some
//! introductory prose. There are no delimiters to anchor on, so extraction
//! is a local pattern match:
//!
//! 1. Skip everything up to and including the first header item
//!    (see [`HEADER_MARKERS`]).
//! 2. Slide a three-item window over the rest, one item at a time, and keep
//!    every window shaped like `integer, glyph, integer`.
//!
//! Windows overlap and a match does not advance the window past itself.
//! Spurious matches produced by the overlap are left for the deduplication
//! pass to discard.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::glyph::is_valid_glyph;
use crate::model::PositionedChar;

/// Substrings (lowercase) that mark the column header row.
pub const HEADER_MARKERS: &[&str] = &[
    "x-coordinate",
    "x coordinate",
    "character",
    "y-coordinate",
    "y coordinate",
];

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+$").expect("valid regex"));

/// Index of the first item containing a header marker, case-insensitively.
pub fn find_header(items: &[String]) -> Option<usize> {
    items.iter().position(|item| {
        let lower = item.to_lowercase();
        HEADER_MARKERS.iter().any(|marker| lower.contains(marker))
    })
}

/// Drop the preamble: the header item and everything before it.
///
/// Without a header the whole sequence is treated as data.
pub fn skip_preamble(items: &[String]) -> &[String] {
    match find_header(items) {
        Some(index) => {
            debug!(header = %items[index], index, "Found header, skipping preamble");
            &items[index + 1..]
        }
        None => {
            debug!("No header found, processing all items");
            items
        }
    }
}

/// Returns `true` if `text` is an optional `-` followed by ASCII digits only.
pub fn looks_like_integer(text: &str) -> bool {
    INTEGER.is_match(text)
}

/// Parse a coordinate literal.
///
/// `None` if the text is not an integer literal or does not fit in `i64`.
pub fn parse_coordinate(text: &str) -> Option<i64> {
    if !looks_like_integer(text) {
        return None;
    }
    text.parse().ok()
}

/// Scan `items` for `(x, glyph, y)` windows.
pub fn extract_triples(items: &[String]) -> Vec<PositionedChar> {
    let mut cells = Vec::new();

    for start in 0..items.len().saturating_sub(2) {
        let (x_text, glyph, y_text) = (&items[start], &items[start + 1], &items[start + 2]);

        if !(looks_like_integer(x_text) && looks_like_integer(y_text) && is_valid_glyph(glyph)) {
            continue;
        }

        match (parse_coordinate(x_text), parse_coordinate(y_text)) {
            (Some(x), Some(y)) => {
                let cell = PositionedChar::new(x, y, glyph.as_str());
                trace!(%cell, "Found cell");
                cells.push(cell);
            }
            _ => warn!(x = %x_text, y = %y_text, "Coordinates out of range, skipping"),
        }
    }

    debug!(count = cells.len(), "Extracted coordinate triples");
    cells
}
