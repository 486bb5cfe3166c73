//! Terminal "game renderer" module.
//!
//! A small rendering layer: [`GameView`] paints the game into a
//! [`FrameBuffer`] without any I/O, and [`TerminalRenderer`] flushes frames to
//! the terminal, rewriting only the cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_bricks_core as core;
pub use tui_bricks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
