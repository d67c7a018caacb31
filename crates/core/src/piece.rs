//! Piece module - a single sub-cube and its face labels.
//!
//! A piece carries one color label per axis. The label is `None` when that
//! face of the piece sits inside the cube rather than on the outer shell.
//! Rotating the slice a piece belongs to changes both its position (the
//! cube's job) and which label points along which axis (this module's job).

use tui_rubik_types::{Axis, FaceColor};

/// A unit sub-cube with up to three visible face colors.
///
/// Pieces are created once at cube construction and only ever mutated by
/// [`Piece::reorient`]; they never move themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    x: FaceColor,
    y: FaceColor,
    z: FaceColor,
}

impl Piece {
    pub const fn new(x: FaceColor, y: FaceColor, z: FaceColor) -> Self {
        Self { x, y, z }
    }

    /// The label shown along the given axis
    pub fn color(&self, axis: Axis) -> FaceColor {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Number of visible (non-interior) faces: 0 for the core, 1 for face
    /// centers, 2 for edges, 3 for corners.
    pub fn visible_faces(&self) -> usize {
        [self.x, self.y, self.z]
            .iter()
            .filter(|label| label.is_some())
            .count()
    }

    /// Permute the labels for a 90° turn of the owning slice around `axis`.
    ///
    /// The permutation is the same for both turn directions: a quarter turn
    /// about an axis exchanges which of the two free axes each label points
    /// along, and that exchange is its own inverse. The label on the rotation
    /// axis itself is untouched.
    ///
    /// | axis | (x, y, z) labels become |
    /// |------|-------------------------|
    /// | X    | (x, z, y)               |
    /// | Y    | (z, y, x)               |
    /// | Z    | (y, x, z)               |
    pub fn reorient(&mut self, axis: Axis) {
        match axis {
            Axis::X => std::mem::swap(&mut self.y, &mut self.z),
            Axis::Y => std::mem::swap(&mut self.x, &mut self.z),
            Axis::Z => std::mem::swap(&mut self.x, &mut self.y),
        }
    }
}
