//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the rules engine for the sliding-tile merge puzzle. It has
//! no dependencies on UI, terminal, or I/O, which makes it:
//!
//! - **Pure**: boards are immutable values; every rule returns a new board
//! - **Deterministic**: randomness enters only through an injected [`TileSource`]
//! - **Testable**: scripted tile sources replay exact spawn sequences
//!
//! # Module Structure
//!
//! - [`board`]: the rectangular tile grid and its point utilities
//! - [`slide`](mod@slide): the row compaction/merge primitive and its four directions
//! - [`rules`]: spawning, move application, blocked and target checks
//! - [`rng`]: the [`TileSource`] capability, seeded and scripted sources
//! - [`game`]: the playing/won/lost session around the current board
//! - [`snapshot`]: plain frame data for views
//!
//! # Game Rules
//!
//! - **Slide**: tiles move as far as possible in the chosen direction
//! - **Merge**: two equal neighbours combine into one tile of double value,
//!   once per tile per move
//! - **Spawn**: every move that changes the board adds a 2 (6/7) or 4 (1/7)
//!   on a random empty cell; a move that changes nothing spawns nothing
//! - **Win**: a tile reaches the target (2048 by default)
//! - **Loss**: no slide in any direction can free a cell
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{apply_move, is_blocked, rng::seeded, slide, Board};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows(&[[0, 2, 0, 2]]).unwrap();
//! assert_eq!(slide(Direction::Left, &board).to_rows(), vec![vec![4, 0, 0, 0]]);
//!
//! let mut rng = seeded(42);
//! let next = apply_move(&board, Direction::Left, &mut rng);
//! assert_eq!(next.tile_count(), 2); // the merged 4 plus one spawned tile
//! assert!(!is_blocked(&next));
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rng;
pub mod rules;
pub mod slide;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::BoardError;
pub use game::{Game, Settings};
pub use rng::{seeded, Scripted, TileSource};
pub use rules::{
    apply_key, apply_move, create_board, has_reached_target, has_won, is_blocked,
    spawn_random_tile,
};
pub use slide::{slide, slide_row};
pub use snapshot::GameSnapshot;
