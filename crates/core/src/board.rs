//! Board module - bounds and the settled mapping
//!
//! The board is a sparse grid: only settled (locked) bricks are stored, keyed by
//! coordinate. Bounds are inclusive on both ends to match the framed layout:
//! columns `[border_size, width]`, rows `[0, height]`.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use std::collections::HashMap;

use log::debug;

use crate::types::{Coord, ShapeKind};

/// The game board - fixed bounds plus the settled mapping
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    border_size: i32,
    /// Every locked brick not part of the falling piece
    settled: HashMap<Coord, ShapeKind>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Dimensions are trusted here; [`crate::GameConfig::validate`] is the
    /// gate for user-supplied values.
    pub fn new(width: i32, height: i32, border_size: i32) -> Self {
        Self {
            width,
            height,
            border_size,
            settled: HashMap::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn border_size(&self) -> i32 {
        self.border_size
    }

    /// Check if a coordinate lies inside the playable interior
    #[inline(always)]
    pub fn in_bounds(&self, c: Coord) -> bool {
        (self.border_size..=self.width).contains(&c.x) && (0..=self.height).contains(&c.y)
    }

    /// Check if a coordinate holds a settled brick
    pub fn is_settled(&self, c: Coord) -> bool {
        self.settled.contains_key(&c)
    }

    /// Get the shape that settled at a coordinate, if any
    pub fn get(&self, c: Coord) -> Option<ShapeKind> {
        self.settled.get(&c).copied()
    }

    /// Check whether every cell is inside the bounds and not settled.
    ///
    /// This is the single feasibility gate for translation, rotation and spawn.
    pub fn can_occupy(&self, cells: &[Coord]) -> bool {
        cells
            .iter()
            .all(|&c| self.in_bounds(c) && !self.settled.contains_key(&c))
    }

    /// Add cells to the settled mapping.
    ///
    /// Callers guarantee the cells passed `can_occupy` beforehand.
    pub fn commit(&mut self, cells: &[Coord], kind: ShapeKind) {
        for &c in cells {
            debug_assert!(self.in_bounds(c), "commit out of bounds: {:?}", c);
            self.settled.insert(c, kind);
        }
    }

    /// Check if every interior column of a row is settled
    pub fn is_row_complete(&self, y: i32) -> bool {
        (self.border_size..=self.width).all(|x| self.settled.contains_key(&Coord::new(x, y)))
    }

    /// Completed rows, top to bottom, evaluated lazily
    pub fn completed_rows(&self) -> impl Iterator<Item = i32> + '_ {
        (self.border_size..=self.height).filter(move |&y| self.is_row_complete(y))
    }

    /// Remove row `y` and move every settled brick above it down by one.
    ///
    /// Returns the number of bricks removed from the row.
    pub fn clear_row(&mut self, y: i32) -> usize {
        let mut removed = 0;
        for x in self.border_size..=self.width {
            if self.settled.remove(&Coord::new(x, y)).is_some() {
                removed += 1;
            }
        }

        // Bottom-up: row r + 1 is always vacated before row r moves into it.
        for row in (0..y).rev() {
            for x in self.border_size..=self.width {
                if let Some(kind) = self.settled.remove(&Coord::new(x, row)) {
                    self.settled.insert(Coord::new(x, row + 1), kind);
                }
            }
        }

        removed
    }

    /// Clear all completed rows and return their original indices (ascending).
    ///
    /// `clear_row(y)` only moves rows above `y`, so clearing in ascending order
    /// leaves the indices of the still-pending rows below untouched.
    pub fn clear_completed_rows(&mut self) -> Vec<i32> {
        let rows: Vec<i32> = self.completed_rows().collect();
        for &y in &rows {
            self.clear_row(y);
        }
        if !rows.is_empty() {
            debug!("cleared rows {:?}, {} bricks settled", rows, self.settled.len());
        }
        rows
    }

    /// Iterate over settled bricks (unordered)
    pub fn settled_cells(&self) -> impl Iterator<Item = (Coord, ShapeKind)> + '_ {
        self.settled.iter().map(|(&c, &k)| (c, k))
    }

    /// Number of settled bricks
    pub fn settled_len(&self) -> usize {
        self.settled.len()
    }
}
