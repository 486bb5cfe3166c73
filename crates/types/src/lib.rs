//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! The playfield is addressed with integer `(x, y)` coordinates, `x` growing to
//! the right and `y` growing downward:
//!
//! - **Columns**: `[border_size, width]` inclusive (column 0 is the frame margin)
//! - **Rows**: `[0, height]` inclusive
//! - **Spawn anchor**: `(width / 2, 0)`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 20 | Interior columns |
//! | `DEFAULT_HEIGHT` | 20 | Interior rows |
//! | `MAX_DIMENSION` | 1024 | Largest accepted width or height |
//! | `BORDER_SIZE` | 1 | Frame margin offset |
//! | `TICK_MS` | 150 | Interval between descend ticks |
//!
//! # Examples
//!
//! ```
//! use tui_bricks_types::{Coord, ShapeKind};
//!
//! let c = Coord::new(3, 4) + Coord::new(1, -1);
//! assert_eq!(c, Coord::new(4, 3));
//! assert_eq!(ShapeKind::ALL.len(), 5);
//! ```

use std::ops;

/// Default interior width in columns
pub const DEFAULT_WIDTH: i32 = 20;

/// Default interior height in rows
pub const DEFAULT_HEIGHT: i32 = 20;

/// Largest accepted board width or height.
///
/// Keeps the framed board addressable in `u16` terminal columns even with
/// wide cells, and bounds the per-lock row scan.
pub const MAX_DIMENSION: i32 = 1024;

/// Offset reserved for the frame margin on the left edge
pub const BORDER_SIZE: i32 = 1;

/// Interval between descend ticks in milliseconds
pub const TICK_MS: u64 = 150;

/// Number of cells in every piece
pub const PIECE_CELLS: usize = 4;

/// Glyph used for a brick (settled or falling)
pub const BRICK_CHAR: char = '$';

/// Glyph used for the board frame
pub const BORDER_CHAR: char = '*';

/// A board position: `x` is the column, `y` the row (growing downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl ops::Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Self) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Coord {
    type Output = Coord;

    fn sub(self, rhs: Self) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

/// The five shapes in the catalog
///
/// - **I**: horizontal bar
/// - **L**: bar with a foot under its left end
/// - **J**: bar with a foot under its right end
/// - **Z**: two offset pairs
/// - **O**: 2x2 square (rotation disabled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    L,
    J,
    Z,
    O,
}

impl ShapeKind {
    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::I,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::O,
    ];
}

/// Move requests accepted by the game
///
/// Player input produces all of them; the descend ticker only produces
/// [`Move::Descend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Shift piece one column left
    Left,
    /// Shift piece one column right
    Right,
    /// Rotate piece 90° clockwise about its pivot
    RotateCw,
    /// Rotate piece 90° counter-clockwise about its pivot
    RotateCcw,
    /// Drop piece one row, locking it if it cannot fall
    Descend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_is_twenty_square() {
        assert_eq!(DEFAULT_WIDTH, 20);
        assert_eq!(DEFAULT_HEIGHT, 20);
        assert_eq!(BORDER_SIZE, 1);
        assert_eq!(TICK_MS, 150);
    }

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(5, 2);
        let b = Coord::new(3, 7);
        assert_eq!(a + b, Coord::new(8, 9));
        assert_eq!(a - b, Coord::new(2, -5));
        assert_eq!(Coord::from((1, 1)), Coord::new(1, 1));
    }
}
