//! Input tests - key presses feed the driver like any other producer

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use tui_bricks::core::{Game, GameConfig};
use tui_bricks::engine::{Driver, StopReason};
use tui_bricks::input::translate_event;
use tui_bricks::types::ShapeKind;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

#[tokio::test]
async fn test_key_sequence_moves_piece_then_quits() {
    let config = GameConfig {
        width: 4,
        height: 4,
        ..GameConfig::default()
    };
    let game = Game::new(&config, vec![ShapeKind::O]).unwrap();
    let (driver, tx) = Driver::new(game, 16);

    let keys = [
        KeyCode::Right,
        KeyCode::Char('l'),
        KeyCode::Char(' '),
        KeyCode::Char('x'),
        KeyCode::Char('q'),
        KeyCode::Left,
    ];
    for code in keys {
        if let Some(cmd) = translate_event(&press(code)) {
            tx.send(cmd).await.unwrap();
        }
    }

    let finished = driver.run(|_| Ok(())).await.unwrap();

    assert_eq!(finished.reason, StopReason::Quit);
    // Two steps right and one down; the Left after quit never applied.
    let mut cells = finished.game.current_cells().to_vec();
    cells.sort();
    let positions: Vec<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
    assert_eq!(positions, vec![(3, 1), (3, 2), (4, 1), (4, 2)]);
}
