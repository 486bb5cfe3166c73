//! Periodic descend ticks.

use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::driver::{CommandSender, InboundCommand, Shutdown};

/// Spawn a task that sends a descend command every `period`.
///
/// The task exits when shutdown is raised or the driver stops receiving.
pub fn spawn_ticker(tx: CommandSender, period: Duration, mut shutdown: Shutdown) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; a fresh piece should get a full period.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.wait() => break,
                _ = interval.tick() => {
                    if tx.send(InboundCommand::tick()).await.is_err() {
                        break;
                    }
                }
            }
        }
        debug!("ticker stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, GameConfig};
    use crate::driver::{Driver, StopReason};
    use crate::types::ShapeKind;

    #[tokio::test]
    async fn test_ticker_drives_game_to_game_over() {
        let config = GameConfig {
            width: 4,
            height: 4,
            ..GameConfig::default()
        };
        let game = Game::new(&config, vec![ShapeKind::O]).unwrap();
        let (driver, tx) = Driver::new(game, 4);
        let ticker = spawn_ticker(tx, Duration::from_millis(1), driver.shutdown());

        let finished = driver.run(|_| Ok(())).await.unwrap();
        assert_eq!(finished.reason, StopReason::GameOver);

        // Ticker observes shutdown and exits on its own.
        time::timeout(Duration::from_secs(5), ticker)
            .await
            .expect("ticker did not stop")
            .unwrap();
    }

    #[tokio::test]
    async fn test_ticker_stops_on_shutdown_without_driver_progress() {
        let config = GameConfig::default();
        let game = Game::new(&config, ShapeKind::ALL.to_vec()).unwrap();
        let (driver, tx) = Driver::new(game, 1);
        let ticker = spawn_ticker(tx.clone(), Duration::from_millis(1), driver.shutdown());

        tx.send(InboundCommand::quit()).await.unwrap();
        let finished = driver.run(|_| Ok(())).await.unwrap();
        assert_eq!(finished.reason, StopReason::Quit);

        time::timeout(Duration::from_secs(5), ticker)
            .await
            .expect("ticker did not stop")
            .unwrap();
    }
}
