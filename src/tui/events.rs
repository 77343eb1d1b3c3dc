use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from keyboard events.
///
/// Actions are focus-agnostic: the same key maps to the same action, and
/// the app interprets it against the currently focused pane.
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    ToggleFocus,
    MoveUp,
    MoveDown,
    Increase,
    Decrease,
    Confirm,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Pane switching
        (KeyCode::Tab, _) => Action::ToggleFocus,

        // Navigation (arrows plus Emacs-style bindings)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        // Value adjustment for the focused form field
        (KeyCode::Left, _) => Action::Decrease,
        (KeyCode::Right, _) => Action::Increase,

        // Book the selected hotel / jump to results
        (KeyCode::Enter, _) => Action::Confirm,

        // Free-text input (source city field)
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
