//! Key mapping from terminal events to virtual key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

use crate::types::{vk, KeyCode as VirtualKey};

/// Map a crossterm key code to the virtual key it reports as down.
pub fn virtual_key(code: KeyCode) -> Option<VirtualKey> {
    match code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase() as u8),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(c as u8),
        KeyCode::Char(' ') => Some(vk::SPACE),

        KeyCode::Left => Some(vk::LEFT),
        KeyCode::Right => Some(vk::RIGHT),
        KeyCode::Up => Some(vk::UP),
        KeyCode::Down => Some(vk::DOWN),

        KeyCode::Enter => Some(vk::RETURN),
        KeyCode::Esc => Some(vk::ESCAPE),
        KeyCode::Backspace => Some(vk::BACK),
        KeyCode::Tab | KeyCode::BackTab => Some(vk::TAB),
        KeyCode::Home => Some(vk::HOME),
        KeyCode::End => Some(vk::END),
        KeyCode::PageUp => Some(vk::PRIOR),
        KeyCode::PageDown => Some(vk::NEXT),
        KeyCode::Insert => Some(vk::INSERT),
        KeyCode::Delete => Some(vk::DELETE),

        KeyCode::F(n @ 1..=12) => Some(vk::F1 + (n - 1)),

        // Only reported when the terminal supports keyboard enhancement.
        KeyCode::Modifier(m) => match m {
            ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => Some(vk::SHIFT),
            ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => Some(vk::CONTROL),
            ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => Some(vk::MENU),
            _ => None,
        },

        _ => None,
    }
}

/// Ctrl+C. Raw mode swallows SIGINT, so this is the only way out for users
/// of applications that never stop on their own.
pub fn is_interrupt(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
