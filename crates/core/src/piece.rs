//! Pieces module - shape templates and pivot rotation
//!
//! Every piece is four cells plus a pivot index into those cells. Rotation is a
//! plain 90° turn about the pivot cell with no wall kicks. The O piece has no
//! pivot: a 2x2 square turns onto itself, so rotating it is always feasible and
//! never changes anything.
//!
//! Moves are split into a pure candidate computation and an unchecked mutation,
//! so one `Board::can_occupy` check serves translation, rotation and spawn.

use crate::board::Board;
use crate::types::{Coord, ShapeKind, PIECE_CELLS};

/// Offset of a single cell relative to the spawn anchor
pub type CellOffset = (i32, i32);

/// Shape template - 4 cell offsets from the spawn anchor
pub type ShapeTemplate = [CellOffset; PIECE_CELLS];

/// Get the spawn template for a shape
pub fn template(kind: ShapeKind) -> ShapeTemplate {
    match kind {
        ShapeKind::I => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        ShapeKind::L => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        ShapeKind::J => [(-1, 0), (0, 0), (1, 0), (1, 1)],
        ShapeKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        ShapeKind::O => [(0, 0), (-1, 0), (0, 1), (-1, 1)],
    }
}

/// Index of the rotation pivot within the template, `None` if rotation is disabled
pub fn pivot_index(kind: ShapeKind) -> Option<usize> {
    match kind {
        // Third cell keeps the bar inside a 4-wide neighbourhood.
        ShapeKind::I => Some(2),
        ShapeKind::L | ShapeKind::J | ShapeKind::Z => Some(1),
        ShapeKind::O => None,
    }
}

/// Rotation direction: +1 turns clockwise on screen, -1 counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Cw,
    Ccw,
}

impl Direction {
    /// Signed factor used by the rotation formula
    pub fn sign(self) -> i32 {
        match self {
            Direction::Cw => 1,
            Direction::Ccw => -1,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Cw => Direction::Ccw,
            Direction::Ccw => Direction::Cw,
        }
    }
}

/// A live piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    cells: [Coord; PIECE_CELLS],
}

impl Piece {
    /// Create a piece with its template placed at `anchor`
    pub fn spawn(kind: ShapeKind, anchor: Coord) -> Self {
        let cells = template(kind).map(|(dx, dy)| anchor + Coord::new(dx, dy));
        Self { kind, cells }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn cells(&self) -> &[Coord; PIECE_CELLS] {
        &self.cells
    }

    /// The pivot cell, `None` for shapes that do not rotate
    pub fn pivot(&self) -> Option<Coord> {
        pivot_index(self.kind).map(|i| self.cells[i])
    }

    /// Cells shifted by `(dx, dy)` without moving the piece
    pub fn candidate_translate(&self, dx: i32, dy: i32) -> [Coord; PIECE_CELLS] {
        let delta = Coord::new(dx, dy);
        self.cells.map(|c| c + delta)
    }

    pub fn can_translate(&self, board: &Board, dx: i32, dy: i32) -> bool {
        board.can_occupy(&self.candidate_translate(dx, dy))
    }

    /// Shift every cell by `(dx, dy)`. Does not check the board.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.cells = self.candidate_translate(dx, dy);
    }

    /// Cells turned 90° about the pivot without moving the piece.
    ///
    /// For a cell at offset `(ox, oy)` from the pivot the displacement is
    /// `(-d·oy - ox, d·ox - oy)`, which lands it at pivot + `(-d·oy, d·ox)`.
    /// Pieces without a pivot return their current cells.
    pub fn candidate_rotate(&self, direction: Direction) -> [Coord; PIECE_CELLS] {
        let Some(pivot) = self.pivot() else {
            return self.cells;
        };
        let d = direction.sign();

        self.cells.map(|c| {
            let Coord { x: ox, y: oy } = c - pivot;
            c + Coord::new(-d * oy - ox, d * ox - oy)
        })
    }

    pub fn can_rotate(&self, board: &Board, direction: Direction) -> bool {
        if self.pivot().is_none() {
            return true;
        }
        board.can_occupy(&self.candidate_rotate(direction))
    }

    /// Turn the piece about its pivot. Does not check the board.
    pub fn rotate(&mut self, direction: Direction) {
        self.cells = self.candidate_rotate(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_places_template_at_anchor() {
        let piece = Piece::spawn(ShapeKind::L, Coord::new(10, 0));
        assert_eq!(
            piece.cells(),
            &[
                Coord::new(9, 0),
                Coord::new(10, 0),
                Coord::new(11, 0),
                Coord::new(9, 1)
            ]
        );
    }

    #[test]
    fn test_i_rotates_to_vertical_about_third_cell() {
        let mut piece = Piece::spawn(ShapeKind::I, Coord::new(5, 2));
        piece.rotate(Direction::Cw);

        // Pivot (5, 2) stays put; the bar stands up through it.
        assert_eq!(
            piece.cells(),
            &[
                Coord::new(5, 0),
                Coord::new(5, 1),
                Coord::new(5, 2),
                Coord::new(5, 3)
            ]
        );
    }

    #[test]
    fn test_clockwise_is_clockwise_on_screen() {
        // The right arm of J (x + 1) must swing down (y + 1) on a clockwise turn.
        let piece = Piece::spawn(ShapeKind::J, Coord::new(5, 5));
        let rotated = piece.candidate_rotate(Direction::Cw);
        assert_eq!(rotated[2], Coord::new(5, 6));
    }

    #[test]
    fn test_o_rotation_is_noop() {
        let piece = Piece::spawn(ShapeKind::O, Coord::new(3, 3));
        assert_eq!(piece.pivot(), None);
        assert_eq!(piece.candidate_rotate(Direction::Cw), *piece.cells());
        assert_eq!(piece.candidate_rotate(Direction::Ccw), *piece.cells());
    }

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Cw.reverse(), Direction::Ccw);
        assert_eq!(Direction::Ccw.sign(), -1);
    }
}
