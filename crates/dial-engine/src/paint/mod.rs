//! Paint model shared between the scene and its serializers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - stroke description for lines and outlines
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;

/// Stroke drawn along a line or the outline of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
