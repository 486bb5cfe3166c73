//! Single-writer game loop.
//!
//! The ticker and the input reader never touch the game directly. They push
//! [`InboundCommand`]s into one bounded channel and the [`Driver`], the only
//! owner of the [`Game`], applies them one at a time. Each feasibility check
//! and its mutation therefore run back to back with nothing in between.

use anyhow::Result;
use log::{debug, info};
use tokio::sync::{mpsc, watch};

use crate::core::Game;
use crate::types::Move;

/// Where a command came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Ticker,
    Input,
}

/// Command payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

/// Command delivered to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundCommand {
    pub source: Source,
    pub command: Command,
}

impl InboundCommand {
    pub fn tick() -> Self {
        Self {
            source: Source::Ticker,
            command: Command::Move(Move::Descend),
        }
    }

    pub fn input(mv: Move) -> Self {
        Self {
            source: Source::Input,
            command: Command::Move(mv),
        }
    }

    pub fn quit() -> Self {
        Self {
            source: Source::Input,
            command: Command::Quit,
        }
    }
}

/// Sending half handed to every command producer.
pub type CommandSender = mpsc::Sender<InboundCommand>;

/// Read side of the shutdown signal.
///
/// Producers check it at their suspension points and stop once it is raised.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown is raised (or the driver is gone).
    pub async fn wait(&mut self) {
        let _ = self.rx.wait_for(|&stop| stop).await;
    }
}

/// Why the driver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    GameOver,
    Quit,
    /// Every producer dropped its sender
    Disconnected,
}

/// Final state returned by [`Driver::run`].
#[derive(Debug)]
pub struct Finished {
    pub game: Game,
    pub reason: StopReason,
}

/// Owns the game and drains the command queue.
pub struct Driver {
    game: Game,
    cmd_rx: mpsc::Receiver<InboundCommand>,
    shutdown_tx: watch::Sender<bool>,
}

impl Driver {
    /// Create a driver with a queue of `capacity` pending commands.
    pub fn new(game: Game, capacity: usize) -> (Self, CommandSender) {
        let (cmd_tx, cmd_rx) = mpsc::channel(capacity.max(1));
        let (shutdown_tx, _) = watch::channel(false);
        let driver = Self {
            game,
            cmd_rx,
            shutdown_tx,
        };
        (driver, cmd_tx)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Subscribe to the shutdown signal.
    pub fn shutdown(&self) -> Shutdown {
        Shutdown {
            rx: self.shutdown_tx.subscribe(),
        }
    }

    /// Apply one command. Returns true if the game changed.
    pub fn apply(&mut self, inbound: InboundCommand) -> bool {
        let Command::Move(mv) = inbound.command else {
            return false;
        };

        let changed = self.game.handle(mv);
        if let Some(event) = self.game.take_last_lock() {
            debug!(
                "{:?} lock via {:?}: rows {:?}, game_over={}",
                event.kind, inbound.source, event.cleared_rows, event.game_over
            );
        }
        changed
    }

    /// Run until game over, quit, or all producers disconnect.
    ///
    /// `on_change` is called once up front and after every command that
    /// changed the game. Shutdown is raised before returning, including on error.
    pub async fn run<F>(mut self, mut on_change: F) -> Result<Finished>
    where
        F: FnMut(&Game) -> Result<()>,
    {
        let result = self.drain(&mut on_change).await;
        let _ = self.shutdown_tx.send(true);
        self.cmd_rx.close();

        let reason = result?;
        info!(
            "session stopped ({:?}): {} locks, {} rows cleared",
            reason,
            self.game.locks(),
            self.game.rows_cleared()
        );
        Ok(Finished {
            game: self.game,
            reason,
        })
    }

    async fn drain<F>(&mut self, on_change: &mut F) -> Result<StopReason>
    where
        F: FnMut(&Game) -> Result<()>,
    {
        on_change(&self.game)?;
        if self.game.is_over() {
            return Ok(StopReason::GameOver);
        }

        while let Some(inbound) = self.cmd_rx.recv().await {
            if inbound.command == Command::Quit {
                return Ok(StopReason::Quit);
            }
            if self.apply(inbound) {
                on_change(&self.game)?;
            }
            if self.game.is_over() {
                return Ok(StopReason::GameOver);
            }
        }

        Ok(StopReason::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::types::ShapeKind;

    fn o_game() -> Game {
        let config = GameConfig {
            width: 4,
            height: 4,
            ..GameConfig::default()
        };
        Game::new(&config, vec![ShapeKind::O]).unwrap()
    }

    #[tokio::test]
    async fn test_quit_stops_driver_and_raises_shutdown() {
        let (driver, tx) = Driver::new(o_game(), 8);
        let shutdown = driver.shutdown();

        tx.send(InboundCommand::input(Move::Right)).await.unwrap();
        tx.send(InboundCommand::quit()).await.unwrap();

        let finished = driver.run(|_| Ok(())).await.unwrap();
        assert_eq!(finished.reason, StopReason::Quit);
        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn test_disconnect_when_all_senders_drop() {
        let (driver, tx) = Driver::new(o_game(), 8);
        tx.send(InboundCommand::tick()).await.unwrap();
        drop(tx);

        let finished = driver.run(|_| Ok(())).await.unwrap();
        assert_eq!(finished.reason, StopReason::Disconnected);
    }

    #[tokio::test]
    async fn test_game_over_stops_consuming() {
        let (driver, tx) = Driver::new(o_game(), 256);

        for _ in 0..100 {
            tx.send(InboundCommand::tick()).await.unwrap();
        }

        let finished = driver.run(|_| Ok(())).await.unwrap();
        assert_eq!(finished.reason, StopReason::GameOver);
        assert!(finished.game.is_over());
        // Remaining ticks were never applied.
        assert!(tx.send(InboundCommand::tick()).await.is_err());
    }

    #[test]
    fn test_callback_error_still_raises_shutdown() {
        let (driver, tx) = Driver::new(o_game(), 8);
        let shutdown = driver.shutdown();

        let result = tokio_test::block_on(async move {
            tx.send(InboundCommand::input(Move::Right)).await.unwrap();
            let mut calls = 0;
            driver
                .run(|_| {
                    calls += 1;
                    if calls > 1 {
                        anyhow::bail!("render failed");
                    }
                    Ok(())
                })
                .await
        });

        assert!(result.is_err());
        assert!(shutdown.is_triggered());
    }

    #[test]
    fn test_apply_ignores_quit() {
        let (mut driver, _tx) = Driver::new(o_game(), 1);
        let before = driver.game().current_cells();
        assert!(!driver.apply(InboundCommand::quit()));
        assert_eq!(driver.game().current_cells(), before);
    }
}
