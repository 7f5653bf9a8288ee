use super::types::KeyState;

/// Detects held → not-held transitions of a polled key.
///
/// Remembers the state observed on the previous frame. Feed it the current
/// polled state once per frame; it reports `true` on the frame the key is
/// first seen released after having been held.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ReleaseEdge {
    was_down: bool,
}

impl ReleaseEdge {
    #[inline]
    pub const fn new() -> Self {
        Self { was_down: false }
    }

    /// Records `state` for the next frame and returns whether this frame is a release.
    #[inline]
    pub fn update(&mut self, state: KeyState) -> bool {
        let down = state.is_pressed();
        let released = self.was_down && !down;
        self.was_down = down;
        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use KeyState::{Pressed, Released};

    #[test]
    fn press_alone_is_not_an_edge() {
        let mut e = ReleaseEdge::new();
        assert!(!e.update(Pressed));
        assert_eq!(e, ReleaseEdge { was_down: true });
    }

    #[test]
    fn release_after_hold_fires_once() {
        let mut e = ReleaseEdge::new();
        e.update(Pressed);
        e.update(Pressed);
        assert!(e.update(Released));
        assert!(!e.update(Released));
    }

    #[test]
    fn idle_never_fires() {
        let mut e = ReleaseEdge::new();
        for _ in 0..10 {
            assert!(!e.update(Released));
        }
    }
}
