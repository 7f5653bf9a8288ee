use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds "is down" information only; programs poll it once per frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // On focus loss, clear the held set so no key stays stuck
                    // when the release happens in another window.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed } => {
                self.keys_down.insert(key);
            }

            InputEvent::Key { key, state: KeyState::Released } => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Polled key state, `Pressed` while the key is held.
    pub fn key_state(&self, key: Key) -> KeyState {
        if self.key_down(key) {
            KeyState::Pressed
        } else {
            KeyState::Released
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state }
    }

    #[test]
    fn press_then_release_tracks_held_set() {
        let mut state = InputState::default();

        state.apply_event(key(Key::ArrowUp, KeyState::Pressed));
        assert_eq!(state.key_state(Key::ArrowUp), KeyState::Pressed);

        state.apply_event(key(Key::ArrowUp, KeyState::Released));
        assert_eq!(state.key_state(Key::ArrowUp), KeyState::Released);
    }

    #[test]
    fn repeated_press_keeps_key_held() {
        let mut state = InputState::default();

        state.apply_event(key(Key::ArrowDown, KeyState::Pressed));
        state.apply_event(key(Key::ArrowDown, KeyState::Pressed));
        assert!(state.key_down(Key::ArrowDown));

        state.apply_event(key(Key::ArrowDown, KeyState::Released));
        assert!(!state.key_down(Key::ArrowDown));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::default();

        state.apply_event(key(Key::Escape, KeyState::Released));
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut state = InputState::default();

        state.apply_event(key(Key::ArrowUp, KeyState::Pressed));
        state.apply_event(InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(!state.key_down(Key::ArrowUp));
    }
}
