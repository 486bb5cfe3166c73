//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **no
//! dependencies** on terminal rendering, input or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical shape sequences
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//!
//! # Module Structure
//!
//! - [`board`]: Bounds, settled mapping, collision checks and row clearing
//! - [`piece`]: Shape templates, pivots and pivot rotation
//! - [`game`]: The spawn / fall / lock state machine
//! - [`rng`]: Seeded uniform shape selection
//! - [`config`]: Board geometry, timing and construction errors
//!
//! # Game Rules
//!
//! - **Catalog**: I, L, J, Z and O pieces, drawn uniformly at random
//! - **Rotation**: Plain 90° turn about a pivot cell, no wall kicks; O never turns
//! - **Lock**: A piece that cannot descend is committed immediately
//! - **Row clear**: Full rows are removed and everything above drops one row
//! - **Game over**: A freshly spawned piece overlaps the settled mass
//!
//! # Example
//!
//! ```
//! use tui_bricks_core::{Game, GameConfig};
//! use tui_bricks_types::{Move, ShapeKind};
//!
//! let mut game = Game::new(&GameConfig::default(), ShapeKind::ALL.to_vec()).unwrap();
//!
//! game.handle(Move::Left);
//! game.handle(Move::RotateCw);
//! game.handle(Move::Descend);
//!
//! assert!(!game.is_over());
//! assert_eq!(game.current_cells().len(), 4);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod piece;
pub mod rng;

pub use tui_bricks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game::{Game, LockEvent, Phase};
pub use piece::{pivot_index, template, Direction, Piece};
pub use rng::{ShapePicker, SimpleRng};
