//! Engine module - serializes every game mutation through one queue
//!
//! Two producers feed the game: a [`ticker`] that injects descend commands on a
//! fixed interval and the input reader (in the input crate). Neither owns the
//! game. Both send into the [`driver::Driver`]'s bounded channel and the driver
//! applies commands strictly in arrival order.
//!
//! When the game ends (or a quit command arrives) the driver raises a
//! [`driver::Shutdown`] signal; producers watch it at their only suspension
//! points (the tick sleep and the key poll timeout) and exit.
//!
//! # Example
//!
//! ```
//! use tui_bricks_core::{Game, GameConfig};
//! use tui_bricks_engine::{Driver, InboundCommand, StopReason};
//! use tui_bricks_types::{Move, ShapeKind};
//!
//! let game = Game::new(&GameConfig::default(), ShapeKind::ALL.to_vec()).unwrap();
//! let (driver, tx) = Driver::new(game, 16);
//!
//! let finished = tokio_test::block_on(async move {
//!     tx.send(InboundCommand::input(Move::Left)).await.unwrap();
//!     tx.send(InboundCommand::quit()).await.unwrap();
//!     driver.run(|_game| Ok(())).await.unwrap()
//! });
//! assert_eq!(finished.reason, StopReason::Quit);
//! ```

pub mod driver;
pub mod ticker;

pub use tui_bricks_core as core;
pub use tui_bricks_types as types;

pub use driver::{
    Command, CommandSender, Driver, Finished, InboundCommand, Shutdown, Source, StopReason,
};
pub use ticker::spawn_ticker;
