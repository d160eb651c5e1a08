//! The cube's closed enumerations: faces, colors, turn directions, and
//! reorientation axes.
//!
//! ## Keys
//!
//! Each enumeration has a single-character key used by notation and by the
//! untyped entry points:
//!
//! | Type        | Keys              |
//! |-------------|-------------------|
//! | `Face`      | `F B U D R L`     |
//! | `Direction` | `+` (clockwise), `-` (counter-clockwise) |
//! | `Axis`      | `h` (horizontal), `v` (vertical) |
//!
//! Parsing a key outside its set returns a `CubeError`.

use serde::{Deserialize, Serialize};

use super::error::{CubeError, Result};

/// One of the six faces, named by the role it plays relative to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Face {
    Front = 0,
    Back = 1,
    Up = 2,
    Down = 3,
    Right = 4,
    Left = 5,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All faces in storage order.
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Up,
        Face::Down,
        Face::Right,
        Face::Left,
    ];

    /// Storage index (0-based, matches `ALL`).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character key.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// Parse a face key.
    ///
    /// ```
    /// use rubiks_sim::core::Face;
    ///
    /// assert_eq!(Face::from_key('R').unwrap(), Face::Right);
    /// assert!(Face::from_key('X').is_err());
    /// ```
    pub fn from_key(key: char) -> Result<Self> {
        match key {
            'F' => Ok(Face::Front),
            'B' => Ok(Face::Back),
            'U' => Ok(Face::Up),
            'D' => Ok(Face::Down),
            'R' => Ok(Face::Right),
            'L' => Ok(Face::Left),
            other => Err(CubeError::InvalidFace(other)),
        }
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// The color this face carries on a freshly constructed cube.
    #[must_use]
    pub const fn home_color(self) -> Color {
        match self {
            Face::Front => Color::White,
            Face::Back => Color::Yellow,
            Face::Up => Color::Blue,
            Face::Down => Color::Green,
            Face::Right => Color::Red,
            Face::Left => Color::Orange,
        }
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(key: char) -> Result<Self> {
        Face::from_key(key)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Facelet color. One per face, so a solved cube shows six distinct colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 1,
    Yellow = 2,
    Blue = 3,
    Green = 4,
    Red = 5,
    Orange = 6,
}

impl Color {
    /// All colors, ordered by code.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
    ];

    /// Numeric code in `1..=6`.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Color for a numeric code, if in range.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Color::White),
            2 => Some(Color::Yellow),
            3 => Some(Color::Blue),
            4 => Some(Color::Green),
            5 => Some(Color::Red),
            6 => Some(Color::Orange),
            _ => None,
        }
    }
}

/// Quarter-turn direction, as seen looking straight at the turned face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `+`
    Clockwise,
    /// `-`
    CounterClockwise,
}

impl Direction {
    /// Both directions, clockwise first.
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Single-character key.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Direction::Clockwise => '+',
            Direction::CounterClockwise => '-',
        }
    }

    /// Parse a direction key.
    pub fn from_key(key: char) -> Result<Self> {
        match key {
            '+' => Ok(Direction::Clockwise),
            '-' => Ok(Direction::CounterClockwise),
            other => Err(CubeError::InvalidDirection(other)),
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = CubeError;

    fn try_from(key: char) -> Result<Self> {
        Direction::from_key(key)
    }
}

/// Axis of a whole-cube quarter turn used to bring a face to the front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Turn about the vertical line: Right comes to the front.
    Horizontal,
    /// Turn about the left-right line: Up comes to the front.
    Vertical,
}

impl Axis {
    /// Both axes.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Single-character key.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Axis::Horizontal => 'h',
            Axis::Vertical => 'v',
        }
    }

    /// Parse an axis key.
    pub fn from_key(key: char) -> Result<Self> {
        match key {
            'h' => Ok(Axis::Horizontal),
            'v' => Ok(Axis::Vertical),
            other => Err(CubeError::InvalidAxis(other)),
        }
    }
}

impl TryFrom<char> for Axis {
    type Error = CubeError;

    fn try_from(key: char) -> Result<Self> {
        Axis::from_key(key)
    }
}
