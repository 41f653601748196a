use crate::coords::Vec2;
use crate::paint::Stroke;

use super::shapes::{CircleStyle, TextStyle};
use super::{Handle, ZIndex};

/// Retained 2D vector canvas.
///
/// Every draw call creates one element and returns the [`Handle`] that owns it.
/// Elements stay on the surface until the handle is passed back to [`remove`].
/// Implementations never diff or merge elements on their own.
///
/// All operations are infallible. Operations on a handle the surface does not
/// know are ignored.
///
/// [`remove`]: DrawSurface::remove
pub trait DrawSurface {
    /// Draws a straight segment from `from` to `to`.
    fn draw_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) -> Handle;

    /// Draws a circle centered at `center`.
    fn draw_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, style: CircleStyle) -> Handle;

    /// Draws `content` centered at `center`.
    fn draw_text(&mut self, z: ZIndex, content: &str, center: Vec2, style: &TextStyle) -> Handle;

    /// Replaces the content of a text element in place.
    fn update_text(&mut self, handle: &Handle, content: &str);

    /// Shows or hides an element without touching its geometry.
    fn set_visible(&mut self, handle: &Handle, visible: bool);

    /// Removes the element and consumes its handle.
    fn remove(&mut self, handle: Handle);
}
