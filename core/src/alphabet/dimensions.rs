//! alphabet/dimensions.rs
//! Grid coordinates and grid shapes.

use serde::{Deserialize, Serialize};

/// A `(x, y)` pair: column and row.
///
/// Used both as a coordinate inside a grid and as the grid shape itself
/// (`x` columns by `y` rows). Coordinates may go negative while a cipher
/// shifts them; `limit` folds them back into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: isize,
    pub y: isize,
}

impl Dimensions {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Number of cells when used as a shape.
    pub fn size(&self) -> usize {
        (self.x.max(0) as usize) * (self.y.max(0) as usize)
    }

    /// Wrap each axis modulo the matching bound (true modulo, never negative).
    pub fn limit(self, bounds: Dimensions) -> Dimensions {
        Dimensions {
            x: self.x.rem_euclid(bounds.x.max(1)),
            y: self.y.rem_euclid(bounds.y.max(1)),
        }
    }

    /// Shift by `(dx, dy)` without wrapping.
    pub fn offset(self, dx: isize, dy: isize) -> Dimensions {
        Dimensions { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(usize, usize)> for Dimensions {
    fn from((x, y): (usize, usize)) -> Self {
        Dimensions::new(x as isize, y as isize)
    }
}
