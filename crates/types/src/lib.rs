//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, terminal rendering, key mapping).
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 4 | Columns of a standard board |
//! | `DEFAULT_HEIGHT` | 4 | Rows of a standard board |
//! | `WIN_VALUE` | 2048 | Tile value that wins the game |
//! | `STARTING_TILES` | 2 | Tiles spawned on a fresh board |
//!
//! # Tile Spawning
//!
//! New tiles are drawn uniformly from [`SPAWN_BAG`]: six 2s and one 4, so a
//! spawned tile is a 2 with probability 6/7 and a 4 with probability 1/7.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, WIN_VALUE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//!
//! // Browser-style key identifiers
//! assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
//! assert_eq!(Direction::from_key("KeyQ"), None);
//!
//! let action = GameAction::Move(Direction::Down);
//! assert_eq!(action.direction(), Some(Direction::Down));
//!
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(WIN_VALUE, 2048);
//! ```

use std::fmt;

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 4;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 4;

/// Tile value that ends the game as a win
pub const WIN_VALUE: Cell = 2048;

/// Number of tiles spawned onto a fresh board
pub const STARTING_TILES: usize = 2;

/// Bag of tile values a spawn draws from (uniform pick)
pub const SPAWN_BAG: [Cell; 7] = [2, 2, 2, 2, 2, 2, 4];

/// A cell on the game board
///
/// - `0`: Empty cell
/// - any other value: a tile, always a power of two
pub type Cell = u32;

/// Check whether `value` may appear on a board (empty or a tile)
///
/// # Examples
///
/// ```
/// use tui_2048_types::is_valid_cell;
///
/// assert!(is_valid_cell(0));
/// assert!(is_valid_cell(2));
/// assert!(is_valid_cell(2048));
/// assert!(!is_valid_cell(1));
/// assert!(!is_valid_cell(6));
/// ```
pub fn is_valid_cell(value: Cell) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Check whether `value` can serve as a win target
///
/// A target must be a tile two merges away from the smallest spawn, so a
/// fresh board cannot already have reached it.
///
/// ```
/// use tui_2048_types::is_valid_target;
///
/// assert!(is_valid_target(2048));
/// assert!(is_valid_target(4));
/// assert!(!is_valid_target(2));
/// assert!(!is_valid_target(0));
/// assert!(!is_valid_target(1000));
/// ```
pub fn is_valid_target(value: Cell) -> bool {
    value >= 4 && value.is_power_of_two()
}

/// The four slide directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order the blocked check walks them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Resolve a browser-style key identifier (`ArrowLeft`, ...)
    ///
    /// Only the four arrow identifiers are recognized; anything else is `None`
    /// so callers can treat it as a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
    /// assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
    /// assert_eq!(Direction::from_key("arrowleft"), None);
    /// assert_eq!(Direction::from_key("Space"), None);
    /// ```
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Whether the direction slides along rows (as opposed to columns)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A (row, column) coordinate on a board
///
/// Row 0 is the top row, column 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Actions the player can apply to a running game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw the current board away and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(direction) => direction.as_str(),
            GameAction::Restart => "restart",
        }
    }

    /// The direction carried by a move action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Move(direction) => Some(*direction),
            GameAction::Restart => None,
        }
    }
}

/// Lifecycle of a single game
///
/// `Won` and `Lost` are terminal; the only way out is a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}
