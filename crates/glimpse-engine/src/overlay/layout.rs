use crate::coords::{Rect, Vec2};

/// Margin between the panel and the top/right window edges.
const MARGIN: f32 = 10.0;
const MIN_SIZE: Vec2 = Vec2::new(250.0, 80.0);

/// Position and size of the overlay panel, in window pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelLayout {
    pub pos: Vec2,
    pub size: Vec2,
}

impl PanelLayout {
    /// Layout used before the first resize: 300x100 anchored top-right.
    pub fn initial(window_width: f32) -> Self {
        let size = Vec2::new(300.0, 100.0);
        Self {
            pos: Vec2::new(window_width - size.x - MARGIN, MARGIN),
            size,
        }
    }

    /// Layout after a resize: a third of the width and a sixth of the height,
    /// never smaller than 250x80, anchored top-right.
    pub fn fit(window_width: f32, window_height: f32) -> Self {
        let size = Vec2::new(window_width / 3.0, window_height / 6.0).max(MIN_SIZE);
        Self {
            pos: Vec2::new(window_width - size.x - MARGIN, MARGIN),
            size,
        }
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::from_origin_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_for_default_window() {
        let l = PanelLayout::initial(800.0);
        assert_eq!(l.pos, Vec2::new(490.0, 10.0));
        assert_eq!(l.size, Vec2::new(300.0, 100.0));
    }

    #[test]
    fn fit_after_wide_short_resize() {
        let l = PanelLayout::fit(900.0, 300.0);
        assert_eq!(l.size, Vec2::new(300.0, 80.0));
        assert_eq!(l.pos, Vec2::new(590.0, 10.0));
    }

    #[test]
    fn fit_scales_with_large_windows() {
        let l = PanelLayout::fit(1920.0, 1080.0);
        assert_eq!(l.size, Vec2::new(640.0, 180.0));
        assert_eq!(l.pos, Vec2::new(1270.0, 10.0));
    }

    #[test]
    fn fit_never_shrinks_below_minimum() {
        let l = PanelLayout::fit(300.0, 200.0);
        assert_eq!(l.size, MIN_SIZE);
        assert_eq!(l.pos.x, 40.0);
    }

    #[test]
    fn right_edge_keeps_margin() {
        let l = PanelLayout::fit(1024.0, 768.0);
        assert!((l.rect().max().x - (1024.0 - MARGIN)).abs() < 1e-3);
    }
}
