use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Form-level intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKey {
    Up,
    Down,
    Left,
    Right,
    Toggle,
    /// Enter: toggle a checkbox, generate from the length row.
    Activate,
    Generate,
    Copy,
    EditLength,
    Digit(char),
    Backspace,
    Commit,
    Cancel,
    Quit,
}

/// Decode a key event. While a custom length is being typed only digits,
/// Backspace, Enter and Esc mean anything.
pub fn map_key(key: KeyEvent, editing: bool) -> Option<FormKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(FormKey::Quit),
            _ => None,
        };
    }

    if editing {
        return match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => Some(FormKey::Digit(c)),
            KeyCode::Backspace => Some(FormKey::Backspace),
            KeyCode::Enter => Some(FormKey::Commit),
            KeyCode::Esc => Some(FormKey::Cancel),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Some(FormKey::Up),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Some(FormKey::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(FormKey::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(FormKey::Right),
        KeyCode::Char(' ') => Some(FormKey::Toggle),
        KeyCode::Enter => Some(FormKey::Activate),
        KeyCode::Char('g') => Some(FormKey::Generate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(FormKey::Copy),
        KeyCode::Char('#') | KeyCode::Char('n') => Some(FormKey::EditLength),
        KeyCode::Esc | KeyCode::Char('q') => Some(FormKey::Quit),
        _ => None,
    }
}
