//! CubeView: maps a `core::Cube` into a terminal framebuffer.
//!
//! The cube is shown unfolded as a cross, `3·size` tiles wide and `4·size`
//! tiles tall: Up on top, then Left / Front / Right side by side, Down below,
//! and Back at the bottom (presented rotated 180°, as if folding the cross
//! shut). This module is pure (no I/O) and can be unit-tested.

use crate::core::Cube;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Axis, Color, Face, FaceColor, Move};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved under the cross for status, prompt and messages.
pub const HUD_ROWS: u16 = 3;

/// Session information shown under the cross.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hud<'a> {
    pub move_count: usize,
    pub last_move: Option<Move>,
    /// Contents of the notation prompt while it is open.
    pub prompt: Option<&'a str>,
    /// One-line status or error message.
    pub message: Option<&'a str>,
}

/// A tile under the cursor: which face, and the face-local tile coordinates
/// in the face's conventional (face-on) presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceHit {
    pub face: Face,
    pub tile: (u16, u16),
}

/// A lightweight terminal renderer for the cube.
pub struct CubeView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for CubeView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl CubeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the cube and HUD into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, cube: &Cube, hud: &Hud, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let n = cube.size() as u16;
        let (start_x, start_y) = self.origin(n, viewport);
        let grid = cross_grid(cube);
        let cols = (3 * n) as usize;

        for (index, tile) in grid.iter().enumerate() {
            let color = match tile {
                Some(color) => *color,
                None => continue,
            };
            let tile_col = (index % cols) as u16;
            let tile_row = (index / cols) as u16;
            let style = CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: color_rgb(color),
                bold: false,
            };
            fb.fill_rect(
                start_x + tile_col * self.cell_w,
                start_y + tile_row * self.cell_h,
                self.cell_w,
                self.cell_h,
                ' ',
                style,
            );
        }

        self.draw_hud(cube, hud, fb, start_x, start_y + 4 * n * self.cell_h + 1);
    }

    /// Hit-test terminal coordinates against the rendered cross.
    ///
    /// Returns the face and face-local tile, normalized to the face-on
    /// presentation (the cross shows Back rotated 180°; the hit undoes
    /// that so gesture mapping sees every face the same way).
    pub fn face_hit(
        &self,
        cube_size: u8,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<FaceHit> {
        let n = cube_size as u16;
        if n == 0 {
            return None;
        }
        let (start_x, start_y) = self.origin(n, viewport);
        if column < start_x || row < start_y {
            return None;
        }
        let tile_col = (column - start_x) / self.cell_w;
        let tile_row = (row - start_y) / self.cell_h;
        if tile_col >= 3 * n || tile_row >= 4 * n {
            return None;
        }

        let face = match (tile_col / n, tile_row / n) {
            (1, 0) => Face::Up,
            (0, 1) => Face::Left,
            (1, 1) => Face::Front,
            (2, 1) => Face::Right,
            (1, 2) => Face::Down,
            (1, 3) => Face::Back,
            _ => return None,
        };

        let mut tx = tile_col % n;
        let mut ty = tile_row % n;
        if face == Face::Back {
            tx = n - 1 - tx;
            ty = n - 1 - ty;
        }
        Some(FaceHit {
            face,
            tile: (tx, ty),
        })
    }

    /// Top-left terminal cell of the cross for this viewport.
    fn origin(&self, n: u16, viewport: Viewport) -> (u16, u16) {
        let total_w = 3 * n * self.cell_w;
        let total_h = 4 * n * self.cell_h + 1 + HUD_ROWS;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;
        (start_x, start_y)
    }

    fn draw_hud(&self, cube: &Cube, hud: &Hud, fb: &mut FrameBuffer, x: u16, y: u16) {
        let plain = CellStyle::default();
        let bold = CellStyle {
            bold: true,
            ..plain
        };

        let last = hud.last_move.as_ref().map(Move::as_str).unwrap_or("-");
        let status = format!(
            "{0}x{0}x{0}  moves: {1}  last: {2}",
            cube.size(),
            hud.move_count,
            last
        );
        fb.put_str(x, y, &status, plain);

        match hud.prompt {
            Some(buffer) => {
                let prompt = format!(":{buffer}_");
                fb.put_str(x, y + 1, &prompt, bold);
            }
            None => {
                fb.put_str(
                    x,
                    y + 1,
                    "r l u d f b turn  shift: inverse  : notation  c pattern  q quit",
                    plain,
                );
            }
        }

        if let Some(message) = hud.message {
            fb.put_str(x, y + 2, message, bold);
        }
    }
}

/// Project the cube onto the unfolded cross.
///
/// Returns a row-major grid `3·size` wide and `4·size` tall; `None` marks
/// the empty corners of the cross. Each shell piece contributes one tile per
/// visible face: Front and the side faces are seen face-on, Up/Down fold
/// over the top and bottom edges, Back closes the cross.
pub fn cross_grid(cube: &Cube) -> Vec<FaceColor> {
    let n = cube.size() as i16;
    let l = cube.coord_limit() as i16;
    let cols = (3 * n) as usize;
    let rows = (4 * n) as usize;
    let mut grid: Vec<FaceColor> = vec![None; cols * rows];

    for (&position, piece) in cube.pieces() {
        let (x, y, z) = (position.x as i16, position.y as i16, position.z as i16);
        let mut put = |col: i16, row: i16, color: FaceColor| {
            grid[(row as usize) * cols + (col as usize)] = color;
        };

        if z == l {
            put(n + x + l, n - y + l, piece.color(Axis::Z));
        }
        if z == -l {
            put(n + x + l, 3 * n + y + l, piece.color(Axis::Z));
        }
        if y == l {
            put(n + x + l, z + l, piece.color(Axis::Y));
        }
        if y == -l {
            put(n + x + l, 2 * n - z + l, piece.color(Axis::Y));
        }
        if x == -l {
            put(z + l, n - y + l, piece.color(Axis::X));
        }
        if x == l {
            put(2 * n - z + l, n - y + l, piece.color(Axis::X));
        }
    }
    grid
}

/// Plain-text dump of the cross, one letter per tile.
///
/// Used by the headless print mode and by tests; `.` marks the empty
/// corners of the cross.
pub fn render_plain(cube: &Cube) -> String {
    let n = cube.size() as usize;
    let cols = 3 * n;
    let grid = cross_grid(cube);
    let mut out = String::with_capacity(grid.len() + 4 * n);
    for (index, tile) in grid.iter().enumerate() {
        out.push(match tile {
            Some(color) => color.letter(),
            None => '.',
        });
        if (index + 1) % cols == 0 {
            out.push('\n');
        }
    }
    out
}

/// Terminal color for each sticker color.
fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(196, 30, 58),
        Color::Orange => Rgb::new(255, 88, 0),
        Color::White => Rgb::new(240, 240, 240),
        Color::Yellow => Rgb::new(255, 213, 0),
        Color::Green => Rgb::new(0, 158, 96),
        Color::Blue => Rgb::new(0, 81, 186),
    }
}
