//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    NextField,
    PrevField,
    /// A printable character for the focused field.
    Input(char),
    Backspace,
    Left,
    Right,
    Submit,
    ToggleView,
    Export,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'q') => KeyAction::Quit,
            KeyCode::Char('t') => KeyAction::ToggleView,
            KeyCode::Char('s') => KeyAction::Export,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Char(c) => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}
