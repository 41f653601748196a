use crate::coords::Vec2;
use crate::paint::Stroke;

/// Straight line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, stroke: Stroke) -> Self {
        Self { from, to, stroke }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}
