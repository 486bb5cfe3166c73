//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Move`] requests and runs
//! the blocking key reader that pushes them onto the engine's command queue.

pub mod map;
pub mod reader;

pub use tui_bricks_engine as engine;
pub use tui_bricks_types as types;

pub use map::{handle_key_event, should_quit};
pub use reader::{spawn_key_reader, translate_event, POLL_INTERVAL};
