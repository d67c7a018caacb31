//! Error types for the cube model.

use thiserror::Error;

/// Errors surfaced by cube construction and notation dispatch.
///
/// Rotation itself is total: once a cube is built, every named move succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// A notation token outside the eighteen-move vocabulary.
    ///
    /// The cube is left exactly as it was before the offending token;
    /// preceding valid tokens of the same notation string stay applied.
    #[error("unknown move: {0:?}")]
    UnknownMove(String),

    /// Cube size that is zero or even.
    ///
    /// The coordinate system assumes a singleton center layer per axis, which
    /// only exists for odd sizes.
    #[error("invalid cube size {0}: size must be odd and at least 1")]
    InvalidSize(u8),
}
