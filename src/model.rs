//! Value types shared by every pipeline stage.

use std::fmt;

use serde::Serialize;

/// A glyph token bound to integer grid coordinates.
///
/// The glyph is usually a single character but may be up to
/// [`MAX_GLYPH_LEN`](crate::glyph::MAX_GLYPH_LEN) code points, since some
/// documents encode one visual symbol as a short sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PositionedChar {
    pub x: i64,
    pub y: i64,
    pub glyph: String,
}

impl PositionedChar {
    pub fn new(x: i64, y: i64, glyph: impl Into<String>) -> Self {
        Self {
            x,
            y,
            glyph: glyph.into(),
        }
    }

    /// Grid key used for deduplication and lookup.
    pub fn position(&self) -> (i64, i64) {
        (self.x, self.y)
    }
}

impl fmt::Display for PositionedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {}, '{}')", self.x, self.y, self.glyph)
    }
}

/// Minimal axis-aligned rectangle containing a set of cells.
///
/// All fields are zero for an empty set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    /// Compute bounds over `cells`, or `Bounds::default()` when empty.
    pub fn of<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a PositionedChar>,
    {
        let mut iter = cells.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };

        iter.fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |b, c| Self {
                min_x: b.min_x.min(c.x),
                max_x: b.max_x.max(c.x),
                min_y: b.min_y.min(c.y),
                max_y: b.max_y.max(c.y),
            },
        )
    }

    /// Number of columns spanned (`max_x - min_x + 1`).
    ///
    /// Computed in `u128`, so any pair of `i64` coordinates fits.
    pub fn width(&self) -> u128 {
        span(self.min_x, self.max_x)
    }

    /// Number of rows spanned (`max_y - min_y + 1`).
    pub fn height(&self) -> u128 {
        span(self.min_y, self.max_y)
    }

    /// Number of positions inside the rectangle.
    pub fn area(&self) -> u128 {
        self.width().saturating_mul(self.height())
    }
}

fn span(min: i64, max: i64) -> u128 {
    u128::from(max.abs_diff(min)) + 1
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X[{}..{}], Y[{}..{}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
