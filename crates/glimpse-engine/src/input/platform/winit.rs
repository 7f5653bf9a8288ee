use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{InputEvent, Key, KeyState};

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Returns `None` for events not represented by the input subsystem,
/// including keys without a [`Key`] variant.
pub fn translate_window_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            map_key(event.physical_key).map(|key| InputEvent::Key { key, state })
        }

        _ => None,
    }
}

pub(crate) fn map_key(pk: PhysicalKey) -> Option<Key> {
    match pk {
        PhysicalKey::Code(KeyCode::Escape) => Some(Key::Escape),
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(Key::ArrowUp),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(Key::ArrowDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn polled_keys_map_to_named_variants() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowUp)), Some(Key::ArrowUp));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowDown)), Some(Key::ArrowDown));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Some(Key::Escape));
    }

    #[test]
    fn other_keys_are_dropped() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyQ)), None);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ShiftLeft)), None);
        assert_eq!(map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)), None);
    }

    #[test]
    fn focus_event_translates() {
        assert_eq!(
            translate_window_event(&WindowEvent::Focused(false)),
            Some(InputEvent::Focused(false))
        );
    }
}
