//! Terminal "cube renderer" module.
//!
//! This is a small, game-oriented rendering layer for showing the cube in a
//! terminal. It renders into a simple framebuffer that can be flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the cube→tiles projection pure so layout and hit-testing share it
//! - Allow precise control over aspect ratio (2 chars wide per tile)

pub mod cube_view;
pub mod fb;
pub mod renderer;

pub use tui_rubik_core as core;
pub use tui_rubik_types as types;

pub use cube_view::{cross_grid, render_plain, CubeView, FaceHit, Hud, Viewport, HUD_ROWS};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_frame_into, TerminalRenderer};
