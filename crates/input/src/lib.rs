//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Keys with no
//! mapping produce `None`, which callers treat as a no-op: the board is not
//! touched and no tile spawns.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
