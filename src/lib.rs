//! TUI Bricks (workspace facade crate).
//!
//! Exposes `tui_bricks::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_bricks_core as core;
pub use tui_bricks_engine as engine;
pub use tui_bricks_input as input;
pub use tui_bricks_term as term;
pub use tui_bricks_types as types;
