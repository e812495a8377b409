//! Key mapping from terminal events to handheld buttons.

use crate::types::{Button, OptionCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a handheld button.
pub fn handle_key_event(key: KeyEvent) -> Option<Button> {
    match key.code {
        // D-pad
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Up => Some(Button::Up),

        // Face buttons
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(Button::A)
        }
        KeyCode::Char(' ') | KeyCode::Char('c') | KeyCode::Char('C') => Some(Button::B),

        // Start / Select
        KeyCode::Enter | KeyCode::Char('p') | KeyCode::Char('P') => Some(Button::Start),
        KeyCode::Tab => Some(Button::Select),

        _ => None,
    }
}

/// Map keyboard input to a sound setting change.
///
/// These keys are checked before [`handle_key_event`] and work on every screen.
pub fn handle_option_key(key: KeyEvent) -> Option<OptionCommand> {
    match key.code {
        KeyCode::Char('m') | KeyCode::Char('M') => Some(OptionCommand::ToggleSound),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(OptionCommand::VolumeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(OptionCommand::VolumeDown),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
