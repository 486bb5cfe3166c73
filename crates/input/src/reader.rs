//! Blocking key reader feeding the engine's command queue.
//!
//! crossterm's event API is synchronous, so the reader runs on its own OS
//! thread. It polls with a short timeout so it can notice shutdown between
//! key presses.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use crate::engine::{CommandSender, InboundCommand, Shutdown};
use crate::map::{handle_key_event, should_quit};

/// How long one poll waits before re-checking shutdown
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Translate a terminal event into a queue command.
///
/// Only key presses count; terminal auto-repeat and releases are ignored.
pub fn translate_event(ev: &Event) -> Option<InboundCommand> {
    let Event::Key(key) = ev else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(*key) {
        return Some(InboundCommand::quit());
    }
    handle_key_event(*key).map(InboundCommand::input)
}

/// Spawn the reader thread.
///
/// The thread exits when shutdown is raised, after sending a quit command, or
/// when the driver stops receiving.
pub fn spawn_key_reader(tx: CommandSender, shutdown: Shutdown) -> JoinHandle<Result<()>> {
    thread::spawn(move || {
        while !shutdown.is_triggered() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let ev = event::read()?;
            let Some(cmd) = translate_event(&ev) else {
                continue;
            };

            if tx.blocking_send(cmd).is_err() {
                warn!("driver stopped, dropping {:?}", cmd.command);
                break;
            }
            if cmd == InboundCommand::quit() {
                break;
            }
        }
        debug!("key reader stopped");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_press_becomes_input_command() {
        assert_eq!(
            translate_event(&key(KeyCode::Left, KeyEventKind::Press)),
            Some(InboundCommand::input(Move::Left))
        );
    }

    #[test]
    fn test_repeat_and_release_are_ignored() {
        assert_eq!(translate_event(&key(KeyCode::Left, KeyEventKind::Repeat)), None);
        assert_eq!(translate_event(&key(KeyCode::Left, KeyEventKind::Release)), None);
    }

    #[test]
    fn test_escape_becomes_quit() {
        assert_eq!(
            translate_event(&key(KeyCode::Esc, KeyEventKind::Press)),
            Some(InboundCommand::quit())
        );
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        assert_eq!(translate_event(&Event::Resize(80, 24)), None);
        assert_eq!(translate_event(&Event::FocusGained), None);
    }
}
