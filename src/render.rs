//! Output formatting for assembled rows.
//!
//! Every function returns a `String`; printing is left to the caller.

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::cells::CellSet;
use crate::model::{Bounds, PositionedChar};

/// Shown instead of blank output when there are no rows.
pub const NOTHING_TO_SHOW: &str = "No ASCII art to display.";

/// Default title for [`OutputMode::Bordered`].
pub const DEFAULT_TITLE: &str = "ASCII Art from Google Docs";

/// Horizontal padding inside the border: `"| "` plus `" |"`.
const BORDER_PADDING: usize = 4;

/// How to present the assembled rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One row per line.
    #[default]
    Plain,
    /// Rows framed by a `=`/`|` border with a centered title.
    Bordered,
    /// Grid statistics followed by the plain rendering.
    Info,
    /// Machine-readable report.
    Json,
}

/// Render `rows` according to `mode`.
pub fn render(
    mode: OutputMode,
    cells: &CellSet,
    rows: &[String],
    title: &str,
) -> serde_json::Result<String> {
    Ok(match mode {
        OutputMode::Plain => render_plain(rows),
        OutputMode::Bordered => render_bordered(rows, title),
        OutputMode::Info => render_info(rows, cells.len(), cells.bounds()),
        OutputMode::Json => render_json(cells, rows)?,
    })
}

/// One row per line, or [`NOTHING_TO_SHOW`] when empty.
pub fn render_plain(rows: &[String]) -> String {
    if rows.is_empty() {
        return NOTHING_TO_SHOW.to_string();
    }
    rows.join("\n")
}

/// Frame `rows` in a border with `title` centered in the top band.
///
/// The interior is as wide as the widest row or the title, whichever is
/// larger. Widths are terminal columns as reported by `unicode-width`, so a
/// double-width glyph counts as two.
pub fn render_bordered(rows: &[String], title: &str) -> String {
    if rows.is_empty() {
        return NOTHING_TO_SHOW.to_string();
    }

    let inner = rows
        .iter()
        .map(|row| row.width())
        .max()
        .unwrap_or(0)
        .max(title.width());
    let band = "=".repeat(inner + BORDER_PADDING);

    let mut out = String::new();
    writeln!(out, "{band}").expect("Writing to String should not fail");
    writeln!(out, "| {} |", center(title, inner)).expect("Writing to String should not fail");
    writeln!(out, "{band}").expect("Writing to String should not fail");
    for row in rows {
        writeln!(out, "| {} |", pad_right(row, inner))
            .expect("Writing to String should not fail");
    }
    out.push_str(&band);
    out
}

/// Grid statistics followed by the plain rendering.
pub fn render_info(rows: &[String], cell_count: usize, bounds: Bounds) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Debug Info:\n  Cells parsed: {cell_count}\n  Grid bounds: {bounds}\n  Grid size: {}x{}\n  Output lines: {}",
        bounds.width(),
        bounds.height(),
        rows.len()
    )
    .expect("Writing to String should not fail");
    out.push('\n');
    out.push_str(&render_plain(rows));
    out
}

#[derive(Serialize)]
struct Report<'a> {
    cell_count: usize,
    bounds: Bounds,
    width: u128,
    height: u128,
    rows: &'a [String],
    cells: &'a [PositionedChar],
}

/// Pretty-printed JSON with counts, bounds, rows and the cells themselves.
pub fn render_json(cells: &CellSet, rows: &[String]) -> serde_json::Result<String> {
    let bounds = cells.bounds();
    let (width, height) = if cells.is_empty() {
        (0, 0)
    } else {
        (bounds.width(), bounds.height())
    };

    serde_json::to_string_pretty(&Report {
        cell_count: cells.len(),
        bounds,
        width,
        height,
        rows,
        cells: cells.as_slice(),
    })
}

fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}
