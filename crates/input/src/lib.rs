//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into session [`map::Command`]s and turns mouse
//! drags over a rendered face into named moves.

pub mod drag;
pub mod map;

pub use tui_rubik_types as types;

pub use drag::{drag_to_move, DragTracker};
pub use map::{handle_key_event, should_quit, Command};
