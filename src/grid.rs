//! Grid assembly: cells to rows of text.
//!
//! Document coordinates grow upward, terminal rows grow downward, so rows
//! are emitted from `max_y` down to `min_y`. Columns run left to right from
//! `min_x` to `max_x`.

use std::collections::HashMap;

use tracing::warn;

use crate::cells::CellSet;
use crate::model::Bounds;

/// Largest bounding area, in positions, that [`assemble`] will fill in.
pub const MAX_GRID_AREA: u128 = 1 << 24;

/// Returns `true` if a grid over `bounds` is small enough to assemble.
pub fn fits(bounds: &Bounds) -> bool {
    bounds.area() <= MAX_GRID_AREA
}

/// Render `cells` as rows, filling empty positions with `fill`.
///
/// Returns one row per `y` in `max_y..=min_y` (descending). Each row is
/// `max_x - min_x + 1` cells wide before trailing runs of `fill` are
/// stripped from its right end. Leading and interior fill are kept, so
/// horizontal alignment survives. An empty set yields no rows, and so does
/// a set whose bounding area exceeds [`MAX_GRID_AREA`].
pub fn assemble(cells: &CellSet, fill: char) -> Vec<String> {
    if cells.is_empty() {
        return Vec::new();
    }

    let bounds = cells.bounds();
    if !fits(&bounds) {
        warn!(
            width = %bounds.width(),
            height = %bounds.height(),
            limit = %MAX_GRID_AREA,
            "Grid too large to assemble"
        );
        return Vec::new();
    }

    let lookup: HashMap<(i64, i64), &str> = cells
        .iter()
        .map(|c| (c.position(), c.glyph.as_str()))
        .collect();

    (bounds.min_y..=bounds.max_y)
        .rev()
        .map(|y| {
            let mut row = String::new();
            for x in bounds.min_x..=bounds.max_x {
                match lookup.get(&(x, y)) {
                    Some(glyph) => row.push_str(glyph),
                    None => row.push(fill),
                }
            }
            row.trim_end_matches(fill).to_string()
        })
        .collect()
}
