use glimpse_engine::input::{KeyState, ReleaseEdge};

/// Number of cubes shown at startup (a 5x5 grid).
pub const DEFAULT_GRID_SIZE: u32 = 25;

/// Largest side length whose square still fits in `u32`.
const MAX_SIDE: u32 = 65_535;

/// Cube count, stepped between perfect squares on UP/DOWN key releases.
///
/// Growth stops at `max_side`, the largest grid the renderer can hold.
#[derive(Debug, Clone)]
pub struct GridState {
    grid_size: u32,
    max_side: u32,
    up: ReleaseEdge,
    down: ReleaseEdge,
}

impl GridState {
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            max_side: MAX_SIDE,
            up: ReleaseEdge::new(),
            down: ReleaseEdge::new(),
        }
    }

    /// Caps the side length, shrinking the current grid if it is larger.
    pub fn set_max_side(&mut self, max_side: u32) {
        self.max_side = max_side.min(MAX_SIDE);
        if self.side() > self.max_side {
            self.grid_size = self.max_side * self.max_side;
        }
    }

    #[inline]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Side length of the square grid.
    #[inline]
    fn side(&self) -> u32 {
        self.grid_size.isqrt()
    }

    /// Feeds this frame's polled UP/DOWN states. Returns `true` if the grid size changed.
    ///
    /// Only a release (held last frame, not held now) acts. Both steps start
    /// from the side length seen at the top of the frame, so releasing both
    /// keys together leaves the shrink result.
    pub fn update(&mut self, up: KeyState, down: KeyState) -> bool {
        let before = self.grid_size;
        let side = before.isqrt();

        if self.up.update(up) {
            self.grid_size = grow(side, self.max_side);
        }
        if self.down.update(down) && self.grid_size > 0 {
            self.grid_size = shrink(side);
        }

        before != self.grid_size
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// Square of the next side length, capped at `max_side`.
fn grow(side: u32, max_side: u32) -> u32 {
    let next = (side + 1).min(max_side);
    next * next
}

/// Square of the previous side length, stopping at zero.
fn shrink(side: u32) -> u32 {
    let prev = side.saturating_sub(1);
    prev * prev
}

#[cfg(test)]
mod tests {
    use super::*;

    use KeyState::{Pressed, Released};

    fn release_up(s: &mut GridState) {
        s.update(Pressed, Released);
        s.update(Released, Released);
    }

    fn release_down(s: &mut GridState) {
        s.update(Released, Pressed);
        s.update(Released, Released);
    }

    // ── growth / shrink ───────────────────────────────────────────────────

    #[test]
    fn up_releases_step_through_squares() {
        let mut s = GridState::default();
        for n in 1..=10u32 {
            release_up(&mut s);
            assert_eq!(s.grid_size(), (5 + n) * (5 + n));
        }
    }

    #[test]
    fn down_releases_step_through_squares() {
        let mut s = GridState::default();
        for n in 1..=5u32 {
            release_down(&mut s);
            assert_eq!(s.grid_size(), (5 - n) * (5 - n));
        }
    }

    #[test]
    fn down_at_zero_stays_zero() {
        let mut s = GridState::new(0);
        release_down(&mut s);
        assert_eq!(s.grid_size(), 0);
        release_up(&mut s);
        assert_eq!(s.grid_size(), 1);
    }

    #[test]
    fn growth_saturates_instead_of_overflowing() {
        assert_eq!(grow(MAX_SIDE, MAX_SIDE), MAX_SIDE * MAX_SIDE);
        assert_eq!(grow(u32::MAX.isqrt(), MAX_SIDE), MAX_SIDE * MAX_SIDE);
    }

    #[test]
    fn growth_stops_at_max_side() {
        let mut s = GridState::default();
        s.set_max_side(8);
        for _ in 0..10 {
            release_up(&mut s);
        }
        assert_eq!(s.grid_size(), 64);
        assert!(!s.update(Pressed, Released));
        assert!(!s.update(Released, Released));
        assert_eq!(s.grid_size(), 64);
    }

    #[test]
    fn lowering_max_side_shrinks_current_grid() {
        let mut s = GridState::new(100);
        s.set_max_side(4);
        assert_eq!(s.grid_size(), 16);
        release_down(&mut s);
        assert_eq!(s.grid_size(), 9);
    }

    #[test]
    fn max_side_never_exceeds_u32_bound() {
        let mut s = GridState::new(0);
        s.set_max_side(u32::MAX);
        assert_eq!(s.max_side, MAX_SIDE);
    }

    // ── edge semantics ────────────────────────────────────────────────────

    #[test]
    fn press_and_hold_do_nothing_until_release() {
        let mut s = GridState::default();
        for _ in 0..100 {
            assert!(!s.update(Pressed, Released));
        }
        assert_eq!(s.grid_size(), 25);
        assert!(s.update(Released, Released));
        assert_eq!(s.grid_size(), 36);
    }

    #[test]
    fn releasing_both_keys_same_frame_shrinks() {
        let mut s = GridState::default();
        s.update(Pressed, Pressed);
        assert!(s.update(Released, Released));
        assert_eq!(s.grid_size(), 16);
    }

    #[test]
    fn releasing_both_keys_at_zero_stays_zero() {
        let mut s = GridState::new(0);
        s.update(Pressed, Pressed);
        s.update(Released, Released);
        assert_eq!(s.grid_size(), 0);
    }

    #[test]
    fn side_tracks_grid_size() {
        let mut s = GridState::default();
        assert_eq!(s.side(), 5);
        release_up(&mut s);
        assert_eq!(s.side(), 6);
    }
}
