//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to carousel actions.
///
/// Ctrl+C is handled by the app directly and never goes through the table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers matter; press/repeat kind and state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind `key` to `action`, replacing any existing binding.
    pub fn bind(&mut self, key: KeyEvent, action: KeyAction) {
        self.bindings.insert(key, action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let plain = |code| KeyEvent::new(code, KeyModifiers::NONE);

        bindings.insert(plain(KeyCode::Left), KeyAction::Previous);
        bindings.insert(plain(KeyCode::Char('h')), KeyAction::Previous);
        bindings.insert(plain(KeyCode::Right), KeyAction::Next);
        bindings.insert(plain(KeyCode::Char('l')), KeyAction::Next);

        // 1-9 jump to items 0-8
        for (offset, digit) in ('1'..='9').enumerate() {
            bindings.insert(plain(KeyCode::Char(digit)), KeyAction::JumpTo(offset));
        }

        bindings.insert(plain(KeyCode::Char(' ')), KeyAction::ToggleAutoplay);

        bindings.insert(plain(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(plain(KeyCode::Esc), KeyAction::Quit);

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    #[test]
    fn arrows_and_vim_keys_navigate() {
        let bindings = KeyBindings::default();
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(bindings.get(key(KeyCode::Left)), Some(KeyAction::Previous));
        assert_eq!(bindings.get(key(KeyCode::Char('h'))), Some(KeyAction::Previous));
        assert_eq!(bindings.get(key(KeyCode::Right)), Some(KeyAction::Next));
        assert_eq!(bindings.get(key(KeyCode::Char('l'))), Some(KeyAction::Next));
    }

    #[test]
    fn digits_jump_zero_based() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)),
            Some(KeyAction::JumpTo(0))
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE)),
            Some(KeyAction::JumpTo(8))
        );
        assert_eq!(
            bindings.get(KeyEvent::new(KeyCode::Char('0'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn lookup_ignores_event_kind() {
        let bindings = KeyBindings::default();
        let repeat = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(bindings.get(repeat), Some(KeyAction::Quit));
    }

    #[test]
    fn bind_replaces_existing() {
        let mut bindings = KeyBindings::default();
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        bindings.bind(q, KeyAction::ToggleAutoplay);
        assert_eq!(bindings.get(q), Some(KeyAction::ToggleAutoplay));
    }
}
