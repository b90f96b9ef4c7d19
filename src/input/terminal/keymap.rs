use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::data::command::Command;

/// Maps one raw terminal event to a command. Anything that is not a key
/// press, including resizes, becomes `NoOp` so the session simply redraws.
#[must_use]
pub fn command_for_event(event: &Event) -> Command {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => command_for_key(key),
        _ => Command::NoOp,
    }
}

#[must_use]
pub fn command_for_key(key: &KeyEvent) -> Command {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            Command::Quit
        }
        (KeyCode::Up, _) => Command::PanUp,
        (KeyCode::Down, _) => Command::PanDown,
        (KeyCode::Left, _) => Command::PanLeft,
        (KeyCode::Right, _) => Command::PanRight,
        (KeyCode::PageUp, _) | (KeyCode::Char('=' | '+'), _) => Command::ZoomIn,
        (KeyCode::PageDown, _) | (KeyCode::Char('-' | '_'), _) => Command::ZoomOut,
        (KeyCode::Char(']'), _) => Command::DepthIncrease,
        (KeyCode::Char('['), _) => Command::DepthDecrease,
        (KeyCode::Char('h'), _) => Command::ToggleHelp,
        (KeyCode::Char('i'), _) => Command::ToggleInfo,
        (KeyCode::Char('r'), _) => Command::Reset,
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Command::Quit,
        _ => Command::NoOp,
    }
}
