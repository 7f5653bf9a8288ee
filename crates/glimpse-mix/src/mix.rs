/// Blend factor shown at startup.
pub const DEFAULT_MIX: f32 = 0.2;
/// Change per frame while a key is held.
pub const MIX_STEP: f32 = 0.001;

/// Texture blend factor, nudged every frame while UP/DOWN are held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MixState {
    mix_factor: f32,
}

impl MixState {
    pub fn new(mix_factor: f32) -> Self {
        Self {
            mix_factor: mix_factor.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn mix_factor(&self) -> f32 {
        self.mix_factor
    }

    /// Applies one frame of held keys. Returns `true` if the factor changed.
    ///
    /// The factor always stays within `[0, 1]`; holding both keys cancels out.
    pub fn update(&mut self, up_held: bool, down_held: bool) -> bool {
        let before = self.mix_factor;
        let mut m = before;

        if up_held && m < 1.0 {
            m += MIX_STEP;
        }
        if down_held && m > 0.0 {
            m -= MIX_STEP;
        }

        self.mix_factor = m.clamp(0.0, 1.0);
        self.mix_factor != before
    }
}

impl Default for MixState {
    fn default() -> Self {
        Self::new(DEFAULT_MIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_default() {
        assert_eq!(MixState::default().mix_factor(), 0.2);
    }

    #[test]
    fn held_up_saturates_at_exactly_one() {
        let mut s = MixState::new(0.998);
        for _ in 0..500 {
            s.update(true, false);
        }
        assert_eq!(s.mix_factor(), 1.0);
    }

    #[test]
    fn held_down_saturates_at_exactly_zero() {
        let mut s = MixState::new(0.0015);
        for _ in 0..10 {
            s.update(false, true);
        }
        assert_eq!(s.mix_factor(), 0.0);
    }

    #[test]
    fn up_is_monotonic_and_bounded() {
        let mut s = MixState::default();
        let mut prev = s.mix_factor();
        for _ in 0..2000 {
            s.update(true, false);
            assert!(s.mix_factor() >= prev);
            assert!(s.mix_factor() <= 1.0);
            prev = s.mix_factor();
        }
    }

    #[test]
    fn down_is_monotonic_and_bounded() {
        let mut s = MixState::default();
        let mut prev = s.mix_factor();
        for _ in 0..2000 {
            s.update(false, true);
            assert!(s.mix_factor() <= prev);
            assert!(s.mix_factor() >= 0.0);
            prev = s.mix_factor();
        }
    }

    #[test]
    fn each_held_frame_moves_one_step() {
        let mut s = MixState::default();
        assert!(s.update(true, false));
        assert!((s.mix_factor() - (DEFAULT_MIX + MIX_STEP)).abs() < 1e-6);
    }

    #[test]
    fn idle_or_both_held_leave_factor_alone() {
        let mut s = MixState::new(0.5);
        assert!(!s.update(false, false));
        s.update(true, true);
        assert!((s.mix_factor() - 0.5).abs() < 1e-6);
    }
}
