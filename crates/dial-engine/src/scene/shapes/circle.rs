use crate::coords::Vec2;
use crate::paint::{Color, Stroke};

/// Fill and outline of a circle. Either part may be absent.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CircleStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleStyle {
    /// Filled disc without outline.
    #[inline]
    pub const fn filled(color: Color) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    /// Outline only; the interior stays transparent.
    #[inline]
    pub const fn outlined(stroke: Stroke) -> Self {
        Self { fill: None, stroke: Some(stroke) }
    }
}

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub style: CircleStyle,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, style: CircleStyle) -> Self {
        Self { center, radius, style }
    }
}
