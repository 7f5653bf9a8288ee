use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Splits off a band of height `h` from the top. Returns `(top, rest)`.
    ///
    /// `h` is clamped to the rectangle height so neither part is negative.
    #[inline]
    pub fn split_top(self, h: f32) -> (Rect, Rect) {
        let h = h.clamp(0.0, self.size.y.max(0.0));
        (
            Rect::new(self.origin.x, self.origin.y, self.size.x, h),
            Rect::new(self.origin.x, self.origin.y + h, self.size.x, self.size.y - h),
        )
    }

    /// Shrinks every edge by `pad`, clamping the size at zero.
    #[inline]
    pub fn inset(self, pad: f32) -> Rect {
        Rect::new(
            self.origin.x + pad,
            self.origin.y + pad,
            (self.size.x - 2.0 * pad).max(0.0),
            (self.size.y - 2.0 * pad).max(0.0),
        )
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = (a.origin.x + a.size.x).min(b.origin.x + b.size.x);
        let y1 = (a.origin.y + a.size.y).min(b.origin.y + b.size.y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0.0 || h <= 0.0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n, r(6.0, 0.0, 4.0, 5.0));
    }

    // ── split_top / inset ─────────────────────────────────────────────────

    #[test]
    fn split_top_partitions_height() {
        let (top, rest) = r(10.0, 10.0, 300.0, 100.0).split_top(20.0);
        assert_eq!(top, r(10.0, 10.0, 300.0, 20.0));
        assert_eq!(rest, r(10.0, 30.0, 300.0, 80.0));
    }

    #[test]
    fn split_top_clamps_to_height() {
        let (top, rest) = r(0.0, 0.0, 50.0, 10.0).split_top(40.0);
        assert_eq!(top.size.y, 10.0);
        assert!(rest.is_empty());
    }

    #[test]
    fn inset_clamps_to_zero() {
        let inner = r(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(inner.size, Vec2::zero());
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0)).unwrap();
        assert_eq!(i, r(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        // Rects share an edge; zero-width overlap is not an intersection.
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }
}
