//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (cube model, terminal rendering, input mapping).
//!
//! # Coordinate System
//!
//! An N×N×N cube (N odd) lives in signed integer space. Each axis coordinate
//! ranges over `-limit..=limit` where `limit = N / 2`, so the cube is centered
//! on the origin:
//!
//! - **X** grows toward the Right face
//! - **Y** grows toward the Up face
//! - **Z** grows toward the Front face
//!
//! A [`Face`] is one of the six outer layers and doubles as the rotation
//! vector of its named move: the face's [`Face::axis`] with [`Face::sign`]
//! giving the signed unit component.
//!
//! # Move Vocabulary
//!
//! Eighteen fixed moves: a quarter turn per face (`R L U D F B`), its inverse
//! (`i` suffix) and its double (`2` suffix). Parsing is case-sensitive - the
//! vocabulary is closed and `"r"` is just as unknown as `"Q"`.
//!
//! # Examples
//!
//! ```
//! use tui_rubik_types::{Face, Move, Position, Twist};
//!
//! let mv = Move::parse("Ri").unwrap();
//! assert_eq!(mv, Move::Ri);
//! assert_eq!(mv.face(), Face::Right);
//! assert_eq!(mv.twist(), Twist::Counter);
//!
//! let pos = Position::new(1, 0, -1);
//! assert_eq!(pos.get(mv.face().axis()), 1);
//!
//! assert_eq!(Move::parse("r"), None);
//! assert_eq!(Move::parse("Q"), None);
//! ```

/// Default cube side length for a new session
pub const DEFAULT_CUBE_SIZE: u8 = 3;

/// The three spatial axes
///
/// Replaces by-name attribute access on coordinates and piece labels with an
/// explicit enum: see [`Position::get`] and the piece accessors in the core
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// The six sticker colors
///
/// The solved-state assignment is fixed: Orange/Red on ±X, Yellow/White on
/// ±Y, Green/Blue on ±Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Orange,
    White,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// One-letter representation used by the plain-text cube dump
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    /// Lowercase color name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Orange => "orange",
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

/// A single face label of a piece
///
/// - `None`: the face is interior (not on the cube's outer shell)
/// - `Some(Color)`: the sticker color shown along that axis
pub type FaceColor = Option<Color>;

/// A position in the cube's signed integer space
///
/// Doubles as a piece's spatial position and, on the outer shell, as the key
/// a slice rotation re-maps. Each component ranges over `-limit..=limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Read the component on the given axis
    pub fn get(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// The six cube faces
///
/// Used both as the target of a named move (each face carries its rotation
/// vector) and as a view side ("which face is this tile on").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
}

impl Face {
    /// All faces in canonical order
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// The axis this face's slice rotates around
    pub fn axis(&self) -> Axis {
        match self {
            Face::Right | Face::Left => Axis::X,
            Face::Up | Face::Down => Axis::Y,
            Face::Front | Face::Back => Axis::Z,
        }
    }

    /// Signed unit component of the rotation vector (+1 or -1)
    ///
    /// Together with [`Face::axis`] this is the rotation vector of the face:
    /// R=(1,0,0), L=(-1,0,0), U=(0,1,0), D=(0,-1,0), F=(0,0,1), B=(0,0,-1).
    pub fn sign(&self) -> i8 {
        match self {
            Face::Right | Face::Up | Face::Front => 1,
            Face::Left | Face::Down | Face::Back => -1,
        }
    }

    /// Face name as used in move notation
    pub fn as_str(&self) -> &'static str {
        match self {
            Face::Right => "R",
            Face::Left => "L",
            Face::Up => "U",
            Face::Down => "D",
            Face::Front => "F",
            Face::Back => "B",
        }
    }
}

/// Turn amount of a named move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Twist {
    /// 90° clockwise as seen from outside the face
    Clockwise,
    /// 90° counter-clockwise (the `i` suffix)
    Counter,
    /// 180° (the `2` suffix) - always two successive quarter turns
    Half,
}

/// The eighteen named moves
///
/// Quarter turn, inverse and double turn for each of the six faces. This is
/// the complete move vocabulary; anything else is an unknown move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    R,
    Ri,
    R2,
    L,
    Li,
    L2,
    U,
    Ui,
    U2,
    D,
    Di,
    D2,
    F,
    Fi,
    F2,
    B,
    Bi,
    B2,
}

impl Move {
    /// All moves in notation order
    pub const ALL: [Move; 18] = [
        Move::R,
        Move::Ri,
        Move::R2,
        Move::L,
        Move::Li,
        Move::L2,
        Move::U,
        Move::Ui,
        Move::U2,
        Move::D,
        Move::Di,
        Move::D2,
        Move::F,
        Move::Fi,
        Move::F2,
        Move::B,
        Move::Bi,
        Move::B2,
    ];

    /// Parse a notation token (case-sensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_rubik_types::Move;
    ///
    /// assert_eq!(Move::parse("R"), Some(Move::R));
    /// assert_eq!(Move::parse("Fi"), Some(Move::Fi));
    /// assert_eq!(Move::parse("U2"), Some(Move::U2));
    /// assert_eq!(Move::parse("u2"), None);
    /// assert_eq!(Move::parse("Q"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "R" => Some(Move::R),
            "Ri" => Some(Move::Ri),
            "R2" => Some(Move::R2),
            "L" => Some(Move::L),
            "Li" => Some(Move::Li),
            "L2" => Some(Move::L2),
            "U" => Some(Move::U),
            "Ui" => Some(Move::Ui),
            "U2" => Some(Move::U2),
            "D" => Some(Move::D),
            "Di" => Some(Move::Di),
            "D2" => Some(Move::D2),
            "F" => Some(Move::F),
            "Fi" => Some(Move::Fi),
            "F2" => Some(Move::F2),
            "B" => Some(Move::B),
            "Bi" => Some(Move::Bi),
            "B2" => Some(Move::B2),
            _ => None,
        }
    }

    /// Notation token for this move
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::R => "R",
            Move::Ri => "Ri",
            Move::R2 => "R2",
            Move::L => "L",
            Move::Li => "Li",
            Move::L2 => "L2",
            Move::U => "U",
            Move::Ui => "Ui",
            Move::U2 => "U2",
            Move::D => "D",
            Move::Di => "Di",
            Move::D2 => "D2",
            Move::F => "F",
            Move::Fi => "Fi",
            Move::F2 => "F2",
            Move::B => "B",
            Move::Bi => "Bi",
            Move::B2 => "B2",
        }
    }

    /// The face this move turns
    pub fn face(&self) -> Face {
        match self {
            Move::R | Move::Ri | Move::R2 => Face::Right,
            Move::L | Move::Li | Move::L2 => Face::Left,
            Move::U | Move::Ui | Move::U2 => Face::Up,
            Move::D | Move::Di | Move::D2 => Face::Down,
            Move::F | Move::Fi | Move::F2 => Face::Front,
            Move::B | Move::Bi | Move::B2 => Face::Back,
        }
    }

    /// How far the face turns
    pub fn twist(&self) -> Twist {
        match self {
            Move::R | Move::L | Move::U | Move::D | Move::F | Move::B => Twist::Clockwise,
            Move::Ri | Move::Li | Move::Ui | Move::Di | Move::Fi | Move::Bi => Twist::Counter,
            Move::R2 | Move::L2 | Move::U2 | Move::D2 | Move::F2 | Move::B2 => Twist::Half,
        }
    }
}
