//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only consulted while browsing; prompts and the menu read keys directly.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    /// Every binding for `action`, for the help overlay.
    pub fn keys_for(&self, action: KeyAction) -> Vec<KeyEvent> {
        let mut keys: Vec<KeyEvent> = self
            .bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(key, _)| *key)
            .collect();
        keys.sort_by_key(|key| format!("{:?}", key.code));
        keys
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut bindings = HashMap::new();

        // Notes
        bindings.insert(
            KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE),
            KeyAction::NewNote,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            KeyAction::PrevNote,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            KeyAction::NextNote,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE),
            KeyAction::PrintAll,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::DeleteAll,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            KeyAction::DeleteCurrent,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE),
            KeyAction::Search,
        );

        // Arrow key scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        // Menu
        bindings.insert(
            KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL),
            KeyAction::OpenMenu,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::OpenMenu,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn plain(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)
    }

    #[test]
    fn default_bindings_cover_note_commands() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(plain('w')), Some(KeyAction::NewNote));
        assert_eq!(bindings.get(plain('a')), Some(KeyAction::PrevNote));
        assert_eq!(bindings.get(plain('d')), Some(KeyAction::NextNote));
        assert_eq!(bindings.get(plain('e')), Some(KeyAction::PrintAll));
        assert_eq!(bindings.get(plain('g')), Some(KeyAction::DeleteAll));
        assert_eq!(bindings.get(plain('c')), Some(KeyAction::DeleteCurrent));
        assert_eq!(bindings.get(plain('f')), Some(KeyAction::Search));
        assert_eq!(bindings.get(plain('m')), Some(KeyAction::Help));
        assert_eq!(bindings.get(plain('q')), Some(KeyAction::Quit));
    }

    #[test]
    fn ctrl_f_opens_menu_but_plain_f_searches() {
        let bindings = KeyBindings::default();
        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(ctrl_f), Some(KeyAction::OpenMenu));
        assert_eq!(bindings.get(plain('f')), Some(KeyAction::Search));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_deletes() {
        let bindings = KeyBindings::default();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.get(ctrl_c), Some(KeyAction::Quit));
        assert_eq!(bindings.get(plain('c')), Some(KeyAction::DeleteCurrent));
    }

    #[test]
    fn unbound_key_is_none() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.get(plain('z')), None);
    }

    #[test]
    fn keys_for_lists_every_binding() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.keys_for(KeyAction::OpenMenu).len(), 2);
        assert_eq!(bindings.keys_for(KeyAction::Quit).len(), 2);
    }
}
