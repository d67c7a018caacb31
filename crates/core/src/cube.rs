//! Cube module - the position→piece map and the slice rotation algorithm.
//!
//! The cube owns a map from every coordinate triple in `[-limit, limit]^3` to
//! one [`Piece`]. A named move selects the outer slice on one face, re-keys
//! each selected piece through a fixed 90° coordinate permutation and
//! reorients its labels. The map is rebuilt wholesale per move and swapped in
//! as a single assignment, so no reader can ever observe a half-rotated cube.

use std::collections::HashMap;

use arrayvec::ArrayVec;

use tui_rubik_types::{Axis, Color, Face, Move, Position, Twist};

use crate::error::CubeError;
use crate::piece::Piece;

/// The move sequence producing the six-face checkerboard pattern.
pub const CHESS_PATTERN: [Move; 6] = [
    Move::R2,
    Move::L2,
    Move::B2,
    Move::F2,
    Move::U2,
    Move::D2,
];

/// An N×N×N cube as a bijection from coordinates to pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    size: u8,
    coord_limit: i8,
    pieces: HashMap<Position, Piece>,
}

impl Cube {
    /// Build a solved cube of the given side length.
    ///
    /// `size` must be odd and at least 1; even sizes have no singleton center
    /// layer and are rejected rather than silently mis-centered.
    pub fn new(size: u8) -> Result<Self, CubeError> {
        if size == 0 || size % 2 == 0 {
            return Err(CubeError::InvalidSize(size));
        }
        let coord_limit = (size / 2) as i8;
        let mut cube = Self {
            size,
            coord_limit,
            pieces: HashMap::with_capacity((size as usize).pow(3)),
        };
        cube.generate_init_pieces();
        Ok(cube)
    }

    /// Side length of the cube
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Maximum magnitude of any coordinate component (`size / 2`)
    pub fn coord_limit(&self) -> i8 {
        self.coord_limit
    }

    /// Read-only view of the full position→piece map
    pub fn pieces(&self) -> &HashMap<Position, Piece> {
        &self.pieces
    }

    /// The piece at `position`, or `None` outside the coordinate range
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.pieces.get(&position)
    }

    /// Apply one named move. Total: every move in the vocabulary succeeds.
    pub fn apply_move(&mut self, mv: Move) {
        for inverse in quarter_turns(mv.twist()) {
            self.rotate_slice(mv.face(), inverse);
        }
    }

    /// Apply a whitespace-separated notation string token by token.
    ///
    /// Tokens are applied in order; an unknown token stops the run and is
    /// reported, with every preceding valid token already applied (legacy
    /// apply-then-fail semantics, no rollback).
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        for token in notation.split_whitespace() {
            let mv =
                Move::parse(token).ok_or_else(|| CubeError::UnknownMove(token.to_string()))?;
            self.apply_move(mv);
        }
        Ok(())
    }

    /// Apply `R2 L2 B2 F2 U2 D2`, the checkerboard pattern.
    pub fn chess_pattern(&mut self) {
        for mv in CHESS_PATTERN {
            self.apply_move(mv);
        }
    }

    /// Rotate the outer slice of `face` by a quarter turn.
    ///
    /// Selection uses the face's sign, direction uses the (possibly negated)
    /// rotation vector; label reorientation depends only on the axis. The
    /// rebuilt map replaces the old one in one assignment.
    fn rotate_slice(&mut self, face: Face, inverse: bool) {
        let axis = face.axis();
        let sign = face.sign();
        let direction = if inverse { -sign } else { sign };

        let mut next = HashMap::with_capacity(self.pieces.len());
        for (&position, &piece) in &self.pieces {
            if position.get(axis) == sign * self.coord_limit {
                let mut moved = piece;
                moved.reorient(axis);
                next.insert(rotated_position(position, axis, direction), moved);
            } else {
                next.insert(position, piece);
            }
        }
        self.pieces = next;
    }

    fn generate_init_pieces(&mut self) {
        let limit = self.coord_limit;
        for x in -limit..=limit {
            for y in -limit..=limit {
                for z in -limit..=limit {
                    let position = Position::new(x, y, z);
                    self.pieces.insert(position, self.init_piece(position));
                }
            }
        }
    }

    /// Solved-state coloring, derived purely from position: a label is
    /// present iff the matching coordinate sits on the outer shell.
    fn init_piece(&self, position: Position) -> Piece {
        let limit = self.coord_limit;
        let x = if position.x == limit {
            Some(Color::Orange)
        } else if position.x == -limit {
            Some(Color::Red)
        } else {
            None
        };
        let y = if position.y == limit {
            Some(Color::Yellow)
        } else if position.y == -limit {
            Some(Color::White)
        } else {
            None
        };
        let z = if position.z == limit {
            Some(Color::Green)
        } else if position.z == -limit {
            Some(Color::Blue)
        } else {
            None
        };
        Piece::new(x, y, z)
    }
}

/// Expand a twist into its quarter-turn applications.
///
/// A half turn is literally two clockwise quarter turns; there is no
/// separate 180° formula.
fn quarter_turns(twist: Twist) -> ArrayVec<bool, 2> {
    let mut turns = ArrayVec::new();
    match twist {
        Twist::Clockwise => turns.push(false),
        Twist::Counter => turns.push(true),
        Twist::Half => {
            turns.push(false);
            turns.push(false);
        }
    }
    turns
}

/// 90° rotation of a position around `axis`, with `direction` the signed
/// unit component of the rotation vector after inverse negation.
fn rotated_position(position: Position, axis: Axis, direction: i8) -> Position {
    let Position { x, y, z } = position;
    match (axis, direction > 0) {
        (Axis::X, true) => Position::new(x, z, -y),
        (Axis::X, false) => Position::new(x, -z, y),
        (Axis::Y, true) => Position::new(-z, y, x),
        (Axis::Y, false) => Position::new(z, y, -x),
        (Axis::Z, true) => Position::new(y, -x, z),
        (Axis::Z, false) => Position::new(-y, x, z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_even_and_zero_sizes() {
        assert_eq!(Cube::new(0), Err(CubeError::InvalidSize(0)));
        assert_eq!(Cube::new(2), Err(CubeError::InvalidSize(2)));
        assert_eq!(Cube::new(4), Err(CubeError::InvalidSize(4)));
        assert!(Cube::new(1).is_ok());
        assert!(Cube::new(3).is_ok());
        assert!(Cube::new(7).is_ok());
    }

    #[test]
    fn solved_cube_has_one_piece_per_coordinate() {
        let cube = Cube::new(3).unwrap();
        assert_eq!(cube.size(), 3);
        assert_eq!(cube.coord_limit(), 1);
        assert_eq!(cube.pieces().len(), 27);

        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    assert!(cube.piece_at(Position::new(x, y, z)).is_some());
                }
            }
        }
        assert!(cube.piece_at(Position::new(2, 0, 0)).is_none());
    }

    #[test]
    fn rotated_position_table_matches_spec() {
        let p = Position::new(1, 2, 3);
        assert_eq!(rotated_position(p, Axis::X, 1), Position::new(1, 3, -2));
        assert_eq!(rotated_position(p, Axis::X, -1), Position::new(1, -3, 2));
        assert_eq!(rotated_position(p, Axis::Y, 1), Position::new(-3, 2, 1));
        assert_eq!(rotated_position(p, Axis::Y, -1), Position::new(3, 2, -1));
        assert_eq!(rotated_position(p, Axis::Z, 1), Position::new(2, -1, 3));
        assert_eq!(rotated_position(p, Axis::Z, -1), Position::new(-2, 1, 3));
    }

    #[test]
    fn rotation_only_touches_the_selected_slice() {
        let mut cube = Cube::new(3).unwrap();
        let before = cube.clone();
        cube.apply_move(Move::R);

        for (&position, piece) in before.pieces() {
            if position.x < 1 {
                assert_eq!(cube.piece_at(position), Some(piece));
            }
        }
    }

    #[test]
    fn size_one_cube_survives_moves() {
        let mut cube = Cube::new(1).unwrap();
        assert_eq!(cube.pieces().len(), 1);
        cube.apply_move(Move::U);
        cube.chess_pattern();
        assert_eq!(cube.pieces().len(), 1);
        assert!(cube.piece_at(Position::new(0, 0, 0)).is_some());
    }
}
