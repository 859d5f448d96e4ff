//! Deduplicated cell collections.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::model::{Bounds, PositionedChar};

/// An ordered set of cells where every `(x, y)` position occurs once.
///
/// Only constructible through [`CellSet::from_candidates`], so downstream
/// stages never see two glyphs competing for one position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CellSet {
    cells: Vec<PositionedChar>,
}

impl CellSet {
    /// Deduplicate candidates by position, keeping the first occurrence.
    ///
    /// Later candidates at an already-seen position are dropped, even if
    /// their glyph differs. Order of the survivors is preserved.
    pub fn from_candidates(candidates: Vec<PositionedChar>) -> Self {
        let mut seen = HashSet::with_capacity(candidates.len());
        let mut cells = Vec::with_capacity(candidates.len());

        for cell in candidates {
            if seen.insert(cell.position()) {
                cells.push(cell);
            } else {
                debug!(x = cell.x, y = cell.y, "Removing duplicate cell");
            }
        }

        let set = Self { cells };
        if !set.is_empty() {
            debug!(bounds = %set.bounds(), "Grid bounds");
        }
        set
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Bounding rectangle, zeroed when empty.
    pub fn bounds(&self) -> Bounds {
        Bounds::of(&self.cells)
    }

    /// Glyph at `(x, y)`, if any. Linear scan; use [`crate::grid`] for bulk lookup.
    pub fn get(&self, x: i64, y: i64) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.glyph.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PositionedChar> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[PositionedChar] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<PositionedChar> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a PositionedChar;
    type IntoIter = std::slice::Iter<'a, PositionedChar>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl FromIterator<PositionedChar> for CellSet {
    fn from_iter<I: IntoIterator<Item = PositionedChar>>(iter: I) -> Self {
        Self::from_candidates(iter.into_iter().collect())
    }
}
