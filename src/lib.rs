//! TUI Rubik (workspace facade crate).
//!
//! This package keeps the `tui_rubik::{core,input,session,term,types}` public
//! API stable while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_rubik_core as core;
pub use tui_rubik_input as input;
pub use tui_rubik_session as session;
pub use tui_rubik_term as term;
pub use tui_rubik_types as types;
