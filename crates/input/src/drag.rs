//! Mouse drag gestures over a rendered face, mapped to named moves.
//!
//! A drag along one of a face's four edge bands (top row, bottom row, left
//! column, right column) turns the layer under that band. Which named move
//! that is depends on the face being dragged: dragging the top row of the
//! Front face moves the Up layer, while the same gesture on the Up face
//! reaches around to the Back layer. The tables below fix that per-side
//! vocabulary for every band and direction, for any odd size.
//!
//! Tile coordinates are face-local, `(column, row)` with `(0, 0)` the top
//! left tile as the face is conventionally presented (Back is presented
//! rotated 180°; callers normalize before mapping - see the term crate's
//! hit test).

use crossterm::event::MouseButton;

use crate::types::{Face, Move};

/// Tracks the press position of an in-flight left-button drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    press: Option<(u16, u16)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a button press at screen coordinates.
    pub fn mouse_down(&mut self, button: MouseButton, column: u16, row: u16) {
        if button == MouseButton::Left {
            self.press = Some((column, row));
        }
    }

    /// Complete the drag, yielding press and release screen coordinates.
    pub fn mouse_up(&mut self, button: MouseButton, column: u16, row: u16) -> Option<DragSpan> {
        if button != MouseButton::Left {
            return None;
        }
        let from = self.press.take()?;
        Some(DragSpan {
            from,
            to: (column, row),
        })
    }

    /// Drop any in-flight press (e.g. when the pointer leaves the cube).
    pub fn cancel(&mut self) {
        self.press = None;
    }
}

/// A completed press→release pair in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSpan {
    pub from: (u16, u16),
    pub to: (u16, u16),
}

/// Edge band of a face that a drag runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Top,
    Bottom,
    LeftCol,
    RightCol,
}

/// Map a drag across face-local tiles to a named move.
///
/// Returns `None` for drags that do not run along a single edge band:
/// same-tile releases, diagonal drags, and drags through the interior of
/// the face.
pub fn drag_to_move(side: Face, from: (u16, u16), to: (u16, u16), size: u16) -> Option<Move> {
    if size == 0 || from == to {
        return None;
    }
    let last = size - 1;

    let (band, forward) = if from.1 == to.1 {
        // Horizontal drag: only the top and bottom rows are bands.
        let band = match from.1 {
            0 => Band::Top,
            row if row == last => Band::Bottom,
            _ => return None,
        };
        (band, to.0 > from.0)
    } else if from.0 == to.0 {
        let band = match from.0 {
            0 => Band::LeftCol,
            col if col == last => Band::RightCol,
            _ => return None,
        };
        (band, to.1 > from.1)
    } else {
        return None;
    };

    if from.0 > last || from.1 > last || to.0 > last || to.1 > last {
        return None;
    }

    Some(band_move(side, band, forward))
}

/// The move for a drag along `band` of `side`.
///
/// `forward` is rightward for rows and downward for columns.
fn band_move(side: Face, band: Band, forward: bool) -> Move {
    use Face::*;
    match (band, forward) {
        (Band::Top, true) => match side {
            Front | Back | Left | Right => Move::Ui,
            Up => Move::Bi,
            Down => Move::Fi,
        },
        (Band::Top, false) => match side {
            Front | Back | Left | Right => Move::U,
            Up => Move::B,
            Down => Move::F,
        },
        (Band::LeftCol, true) => match side {
            Front | Up | Back | Down => Move::L,
            Left => Move::B,
            Right => Move::F,
        },
        (Band::LeftCol, false) => match side {
            Front | Up | Back | Down => Move::Li,
            Left => Move::Bi,
            Right => Move::Fi,
        },
        (Band::Bottom, true) => match side {
            Front | Left | Right | Back => Move::D,
            Up => Move::F,
            Down => Move::B,
        },
        (Band::Bottom, false) => match side {
            Front | Left | Right | Back => Move::Di,
            Up => Move::Fi,
            Down => Move::Bi,
        },
        (Band::RightCol, true) => match side {
            Front | Up | Down => Move::Ri,
            Back => Move::Li,
            Left => Move::Fi,
            Right => Move::Bi,
        },
        (Band::RightCol, false) => match side {
            Front | Up | Down => Move::R,
            Back => Move::L,
            Left => Move::F,
            Right => Move::B,
        },
    }
}
