//! Coordinate and geometry types shared by the scene and the clock face.
//!
//! Canonical space:
//! - Logical units (the SVG user space)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are measured clockwise from "up" (-Y), which is the clock-face convention.

mod vec2;
mod view_box;

pub use vec2::Vec2;
pub use view_box::ViewBox;
