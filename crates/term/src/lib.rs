//! Terminal "game renderer" module.
//!
//! A thin adapter between the rules engine and a terminal: [`GameView`] turns a
//! [`core::GameSnapshot`] into a framebuffer (pure, unit-testable) and
//! [`TerminalRenderer`] flushes framebuffers to the real terminal, redrawing
//! only the cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
