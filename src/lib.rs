//! `glyphgrid` - ASCII art from coordinate tables in published documents
//!
//! Some published documents (Google Docs "publish to web" pages in
//! particular) carry a picture as a table of `x`, `character`, `y` rows.
//! This crate pulls that table out of the page's visible text and redraws
//! the picture.
//!
//! # Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Text collection | [`collect`] | visible text items in document order |
//! | Triple extraction | [`extract`] | candidate [`PositionedChar`]s |
//! | Deduplication | [`cells`] | [`CellSet`] with unique positions |
//! | Grid assembly | [`grid`] | rows of text, top row first |
//! | Presentation | [`render`] | plain, bordered, info or JSON output |
//!
//! None of the stages can fail: a page without art yields an empty
//! [`CellSet`] and no rows. Fetching ([`fetch`]) and configuration
//! ([`config`]) are the only fallible parts.
//!
//! # Example
//!
//! ```rust
//! use glyphgrid::{grid, parse_document};
//!
//! let html = "<table>\
//!     <tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>\
//!     <tr><td>0</td><td>#</td><td>0</td></tr>\
//!     <tr><td>1</td><td>@</td><td>1</td></tr>\
//!     </table>";
//!
//! let cells = parse_document(html);
//! assert_eq!(cells.len(), 2);
//! assert_eq!(grid::assemble(&cells, '.'), vec![".@", "#"]);
//! ```

pub mod cells;
pub mod collect;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod glyph;
pub mod grid;
pub mod model;
pub mod render;

use tracing::info;

pub use cells::CellSet;
pub use config::Config;
pub use error::{GlyphError, Result};
pub use fetch::{validate_url, DocumentFetcher};
pub use model::{Bounds, PositionedChar};
pub use render::OutputMode;

/// Version of glyphgrid
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract the art's cells from a whole HTML document.
///
/// Collects visible text, skips the preamble up to the column header,
/// scans for `(x, glyph, y)` triples and drops repeated positions.
pub fn parse_document(html: &str) -> CellSet {
    let items = collect::collect_text_items(html);
    cells_from_items(&items)
}

/// Run extraction and deduplication over already-collected text items.
pub fn cells_from_items(items: &[String]) -> CellSet {
    let data = extract::skip_preamble(items);
    let candidates = extract::extract_triples(data);
    let cells = CellSet::from_candidates(candidates);
    info!(cells = cells.len(), "Parsed ASCII art cells");
    cells
}
