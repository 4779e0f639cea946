//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the workspace.
//! Everything here is plain data, usable by the simulation core, the move planner
//! and any presentation layer alike.
//!
//! # Board Geometry
//!
//! Reference playfield dimensions:
//!
//! - **Width**: 19 columns (indexed 0-18)
//! - **Height**: 13 rows (indexed 0-12, row 0 is the bottom)
//! - **Goal columns**: x = -1 (team A exit) and x = width (team B exit)
//!
//! Gravity pulls toward decreasing y. Team A walks toward decreasing x,
//! team B toward increasing x.
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIECES_PER_TEAM` | 12 | Mice spawned per team |
//! | `HISTORY_LEN` | 6 | Columns remembered per team for anti-repetition |
//! | `WINNING_SCORE` | 12 | Score that wins the match |
//! | `DRAW_THRESHOLD` | 11 | Both scores at or above this start the draw countdown |
//! | `DRAW_COUNTDOWN` | 8 | Committed moves before a draw is declared |
//!
//! # Examples
//!
//! ```
//! use mice_men_types::{Coord, Direction, Occupant, Team, BOARD_WIDTH};
//!
//! let team = Team::from_str("a").unwrap();
//! assert_eq!(team.opponent(), Team::B);
//! assert_eq!(team.step(), -1);
//!
//! let origin = Coord::new(3, 4);
//! assert_eq!(origin.offset(team.step(), 0), Coord::new(2, 4));
//!
//! assert_eq!(Occupant::from_char('b'), Some(Occupant::Piece(Team::B)));
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(BOARD_WIDTH, 19);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board width in cells (19 columns)
pub const BOARD_WIDTH: usize = 19;

/// Board height in cells (13 rows)
pub const BOARD_HEIGHT: usize = 13;

/// Mice placed per team when the board is generated
pub const PIECES_PER_TEAM: u32 = 12;

/// Number of past column selections remembered per team
pub const HISTORY_LEN: usize = 6;

/// Score that ends the match in favour of the scoring team
pub const WINNING_SCORE: u32 = 12;

/// When both scores reach this value the draw countdown starts
pub const DRAW_THRESHOLD: u32 = 11;

/// Committed moves between countdown activation and a declared draw
pub const DRAW_COUNTDOWN: u32 = 8;

/// Border columns carry an obstacle on every row divisible by this
pub const BORDER_OBSTACLE_PERIOD: i32 = 3;


/// The two competing teams
///
/// - **A**: walks toward decreasing x, exits through x = -1
/// - **B**: walks toward increasing x, exits through x = width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    /// Both teams in index order
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    /// The other team
    pub fn opponent(&self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    /// Horizontal walking step (-1 for A, +1 for B)
    pub fn step(&self) -> i32 {
        match self {
            Team::A => -1,
            Team::B => 1,
        }
    }

    /// Index into per-team arrays
    pub fn index(&self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }

    /// Parse team from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mice_men_types::Team;
    ///
    /// assert_eq!(Team::from_str("A"), Some(Team::A));
    /// assert_eq!(Team::from_str("b"), Some(Team::B));
    /// assert_eq!(Team::from_str("c"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "a" => Some(Team::A),
            "b" => Some(Team::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::A => "a",
            Team::B => "b",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::A => write!(f, "team A"),
            Team::B => write!(f, "team B"),
        }
    }
}

/// Something standing in a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Static cheese block; only ever moves as part of a column shift
    Obstacle,
    /// A mouse owned by a team
    Piece(Team),
}

impl Occupant {
    /// Owning team, if this is a piece
    pub fn team(&self) -> Option<Team> {
        match self {
            Occupant::Obstacle => None,
            Occupant::Piece(team) => Some(*team),
        }
    }

    /// Single character used by the ASCII board format
    pub fn as_char(&self) -> char {
        match self {
            Occupant::Obstacle => '#',
            Occupant::Piece(Team::A) => 'a',
            Occupant::Piece(Team::B) => 'b',
        }
    }

    /// Parse an ASCII board character; `None` for anything that is not an occupant
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Occupant::Obstacle),
            'a' | 'A' => Some(Occupant::Piece(Team::A)),
            'b' | 'B' => Some(Occupant::Piece(Team::B)),
            _ => None,
        }
    }

    /// Compact numeric code (0 is reserved for an empty cell)
    pub fn code(&self) -> u8 {
        match self {
            Occupant::Obstacle => 1,
            Occupant::Piece(Team::A) => 2,
            Occupant::Piece(Team::B) => 3,
        }
    }
}

/// A board cell: `None` when empty
pub type Cell = Option<Occupant>;

/// Board coordinate
///
/// Interior cells have `x ∈ [0, width)` and `y ∈ [0, height)`.
/// `x = -1` and `x = width` are goal addresses that are queried but never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The cell directly below
    pub fn below(&self) -> Self {
        self.offset(0, -1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Column shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Every occupant moves one row up; the top row wraps to row 0
    Up,
    /// Every occupant moves one row down; row 0 wraps to the top
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Up, Direction::Down];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Row a cell lands on after a shift in a column of `height` rows
    pub fn rotate_row(&self, y: i32, height: i32) -> i32 {
        match self {
            Direction::Up => (y + 1).rem_euclid(height),
            Direction::Down => (y - 1).rem_euclid(height),
        }
    }
}
