//! Cube state engine - pure, deterministic, and testable
//!
//! This crate holds the geometric model of the cube and nothing else: no
//! rendering, no input, no I/O. The whole public surface is the move API
//! plus read-only queries, so collaborators (views, input handlers, the
//! session controller) can apply moves and project the resulting state
//! without being able to corrupt it.
//!
//! # Module Structure
//!
//! - [`cube`]: the position→piece map, construction, and the slice rotation
//!   algorithm behind the eighteen named moves
//! - [`piece`]: a single sub-cube and the label permutation under rotation
//! - [`error`]: typed failures (unknown move, invalid size)
//!
//! # Invariants
//!
//! - The piece map is a bijection over `[-limit, limit]^3` at all times;
//!   moves re-key entries, they never add or remove any.
//! - A piece's label on an axis is present iff its current coordinate on
//!   that axis is `±limit`.
//! - A move is a single atomic transition: the map is rebuilt and swapped in
//!   one step.
//!
//! # Example
//!
//! ```
//! use tui_rubik_core::Cube;
//! use tui_rubik_types::Move;
//!
//! let mut cube = Cube::new(3).unwrap();
//! cube.apply_move(Move::R);
//! cube.apply_notation("U Ri Ui").unwrap();
//! assert_eq!(cube.pieces().len(), 27);
//!
//! // Unknown tokens are rejected without touching the cube.
//! assert!(cube.apply_notation("Q").is_err());
//! ```

pub mod cube;
pub mod error;
pub mod piece;

pub use tui_rubik_types as types;

pub use cube::{Cube, CHESS_PATTERN};
pub use error::CubeError;
pub use piece::Piece;
