/// Keyboard key identifier.
///
/// Only keys the demos poll get a variant; the platform layer drops the rest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    ArrowUp,
    ArrowDown,
}

/// Held state of a key, as returned by [`InputState::key_state`](super::InputState::key_state).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

impl KeyState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == KeyState::Pressed
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key { key: Key, state: KeyState },

    /// Window focus change.
    Focused(bool),
}
