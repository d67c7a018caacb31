//! Session controller: owns the cube and mediates every mutation.
//!
//! Views and input handlers never touch the cube directly; they hand the
//! session a move or a notation string, and the session applies it, records
//! it in the move history and logs the instruction. Invalid instructions
//! are logged and reported without mutating the cube (beyond the valid
//! prefix of a notation string, which stays applied).

use log::{error, info};

use tui_rubik_core::{Cube, CubeError, CHESS_PATTERN};
use tui_rubik_types::Move;

/// An interactive cube session: the cube plus its move history.
#[derive(Debug, Clone)]
pub struct Session {
    cube: Cube,
    history: Vec<Move>,
}

impl Session {
    /// Start a session on a fresh solved cube.
    pub fn new(size: u8) -> Result<Self, CubeError> {
        let cube = Cube::new(size)?;
        info!("starting new session: {0}x{0}x{0} cube", size);
        Ok(Self {
            cube,
            history: Vec::new(),
        })
    }

    /// Read-only access to the cube for views.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Apply one named move.
    pub fn apply_move(&mut self, mv: Move) {
        info!("applying instruction: {}", mv.as_str());
        self.cube.apply_move(mv);
        self.history.push(mv);
    }

    /// Apply a notation string token by token.
    ///
    /// Valid tokens before an unknown one stay applied and recorded
    /// (apply-then-fail, matching the cube's own notation semantics).
    pub fn apply_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        for token in notation.split_whitespace() {
            match Move::parse(token) {
                Some(mv) => self.apply_move(mv),
                None => {
                    error!("invalid instruction: {}", token);
                    return Err(CubeError::UnknownMove(token.to_string()));
                }
            }
        }
        Ok(())
    }

    /// Apply the checkerboard pattern sequence.
    pub fn chess_pattern(&mut self) {
        for mv in CHESS_PATTERN {
            self.apply_move(mv);
        }
    }
}
