use super::Vec2;

/// Visible region of the scene in logical units (top-left origin).
///
/// Serializers use this as the SVG `viewBox`; hosts use it to size the output.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewBox {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ViewBox {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square box anchored at the origin.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * 0.5,
            self.origin.y + self.size.y * 0.5,
        )
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0 && self.origin.is_finite() && self.size.is_finite()
    }

    /// Closed containment: [min, max]. Points on the border (e.g. the tip of
    /// a tick that touches the bezel) count as inside.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x <= self.origin.x + self.size.x
            && p.y <= self.origin.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_center() {
        assert_eq!(ViewBox::square(200.0).center(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn contains_border_inclusive() {
        let vb = ViewBox::square(200.0);
        assert!(vb.contains(Vec2::new(0.0, 0.0)));
        assert!(vb.contains(Vec2::new(200.0, 200.0)));
    }

    #[test]
    fn contains_outside() {
        let vb = ViewBox::square(200.0);
        assert!(!vb.contains(Vec2::new(-0.5, 10.0)));
        assert!(!vb.contains(Vec2::new(10.0, 200.5)));
    }

    #[test]
    fn empty_box_is_invalid() {
        assert!(!ViewBox::new(0.0, 0.0, 0.0, 10.0).is_valid());
        assert!(ViewBox::square(1.0).is_valid());
    }
}
