//! Terminal runner (default binary).
//!
//! Wires the pieces together: the descend ticker and the key reader feed one
//! command queue, the driver applies commands to the game and redraws through
//! the framebuffer renderer after every change.
//!
//! Logs go to stderr; run with `RUST_LOG=debug 2>bricks.log` to capture them
//! without garbling the board.

use std::thread::JoinHandle;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use tokio::runtime::Runtime;

use tui_bricks::core::{Game, GameConfig};
use tui_bricks::engine::{spawn_ticker, Driver, Finished, StopReason};
use tui_bricks::input::spawn_key_reader;
use tui_bricks::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bricks::types::ShapeKind;

/// Pending commands before producers wait on the driver
const QUEUE_CAPACITY: usize = 32;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config = GameConfig::from_env()?;
    if std::env::var_os("BRICKS_SEED").is_none() {
        config = config.with_seed(clock_seed());
    }
    let game = Game::new(&config, ShapeKind::ALL.to_vec())?;
    info!("starting {}x{} board, seed {}", config.width, config.height, config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();

    let finished = result?;
    println!(
        "{}: {} pieces locked, {} rows cleared",
        match finished.reason {
            StopReason::GameOver => "game over",
            StopReason::Quit | StopReason::Disconnected => "quit",
        },
        finished.game.locks(),
        finished.game.rows_cleared()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: Game, config: &GameConfig) -> Result<Finished> {
    let rt = Runtime::new()?;

    let (finished, reader) = rt.block_on(async {
        let (driver, tx) = Driver::new(game, QUEUE_CAPACITY);
        let ticker = spawn_ticker(
            tx.clone(),
            Duration::from_millis(config.tick_ms),
            driver.shutdown(),
        );
        let reader = spawn_key_reader(tx, driver.shutdown());

        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);
        let finished = driver
            .run(|game| {
                let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
                view.render_into(game, Viewport::new(w, h), &mut fb);
                term.draw(&fb)
            })
            .await;

        let _ = ticker.await;
        (finished, reader)
    });

    join_reader(reader)?;
    let finished = finished?;

    if finished.reason == StopReason::GameOver {
        wait_for_key()?;
    }
    Ok(finished)
}

fn join_reader(reader: JoinHandle<Result<()>>) -> Result<()> {
    reader
        .join()
        .map_err(|_| anyhow!("key reader thread panicked"))?
}

/// Keep the final board on screen until a key is pressed.
fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
