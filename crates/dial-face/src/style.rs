//! Visual configuration of the face.
//!
//! Everything here is styling: the geometry calculator only ever sees the
//! radii and lengths, and the redraw protocol does not depend on any value.

use dial_engine::coords::{Vec2, ViewBox};
use dial_engine::paint::{Color, Stroke};

/// Colors, widths and lengths used to draw a [`ClockFace`](crate::ClockFace).
///
/// # Example
/// ```rust
/// use dial_face::FaceStyle;
/// use dial_engine::paint::Color;
///
/// let style = FaceStyle::new()
///     .radius(120.0)
///     .second_hand_color(Color::from_srgb_u8(0x20, 0x80, 0xff, 255))
///     .font_family("Iosevka");
/// assert_eq!(style.center().x, 120.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    /// Rim radius; the face occupies a `2r × 2r` box with its center at `(r, r)`.
    pub radius: f32,
    pub bezel_width: f32,

    pub short_tick_length: f32,
    pub long_tick_length: f32,
    pub short_tick_width: f32,
    pub long_tick_width: f32,

    pub hour_hand_length: f32,
    pub minute_hand_length: f32,
    pub second_hand_length: f32,
    pub hour_hand_width: f32,
    pub minute_hand_width: f32,
    pub second_hand_width: f32,
    pub second_cap_radius: f32,

    pub label_radius: f32,
    pub label_size: f32,
    /// Vertical offset of the digital readout below the center.
    pub digital_offset: f32,
    pub digital_size: f32,
    pub font_family: Option<String>,

    pub color: Color,
    pub quarter_tick_color: Color,
    pub second_hand_color: Color,
    pub digital_color: Color,
}

impl FaceStyle {
    pub fn new() -> Self {
        Self {
            radius: 100.0,
            bezel_width: 2.0,

            short_tick_length: 7.0,
            long_tick_length: 10.0,
            short_tick_width: 1.0,
            long_tick_width: 2.0,

            hour_hand_length: 40.0,
            minute_hand_length: 60.0,
            second_hand_length: 80.0,
            hour_hand_width: 3.0,
            minute_hand_width: 2.0,
            second_hand_width: 1.0,
            second_cap_radius: 5.0,

            label_radius: 80.0,
            label_size: 12.0,
            digital_offset: 20.0,
            digital_size: 10.0,
            font_family: Some("JetBrains Mono".to_owned()),

            color: Color::BLACK,
            quarter_tick_color: Color::RED,
            second_hand_color: Color::RED,
            digital_color: Color::GRAY,
        }
    }

    pub fn radius(mut self, v: f32) -> Self { self.radius = v; self }
    pub fn tick_lengths(mut self, short: f32, long: f32) -> Self {
        self.short_tick_length = short;
        self.long_tick_length = long;
        self
    }
    pub fn hand_lengths(mut self, hour: f32, minute: f32, second: f32) -> Self {
        self.hour_hand_length = hour;
        self.minute_hand_length = minute;
        self.second_hand_length = second;
        self
    }
    pub fn label_radius(mut self, v: f32) -> Self { self.label_radius = v; self }
    pub fn font_family(mut self, v: impl Into<String>) -> Self { self.font_family = Some(v.into()); self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn quarter_tick_color(mut self, v: Color) -> Self { self.quarter_tick_color = v; self }
    pub fn second_hand_color(mut self, v: Color) -> Self { self.second_hand_color = v; self }
    pub fn digital_color(mut self, v: Color) -> Self { self.digital_color = v; self }

    /// Face center in surface coordinates.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.radius, self.radius)
    }

    /// Bounding box of the face in surface coordinates.
    #[inline]
    pub fn view_box(&self) -> ViewBox {
        ViewBox::square(self.radius * 2.0)
    }

    /// Quarter ticks are colored, every 5th tick is thicker.
    pub(crate) fn tick_stroke(&self, is_long: bool, is_quarter: bool) -> Stroke {
        let color = if is_quarter { self.quarter_tick_color } else { self.color };
        let width = if is_long { self.long_tick_width } else { self.short_tick_width };
        Stroke::new(width, color)
    }

    /// Hands must nest: hour < minute < second.
    pub(crate) fn hands_are_ordered(&self) -> bool {
        self.hour_hand_length < self.minute_hand_length
            && self.minute_hand_length < self.second_hand_length
    }
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fit_a_200_unit_box() {
        let style = FaceStyle::default();
        assert_eq!(style.view_box(), ViewBox::square(200.0));
        assert_eq!(style.center(), Vec2::new(100.0, 100.0));
        assert!(style.hands_are_ordered());
    }

    #[test]
    fn tick_stroke_by_category() {
        let style = FaceStyle::default();
        assert_eq!(style.tick_stroke(true, true), Stroke::new(2.0, Color::RED));
        assert_eq!(style.tick_stroke(true, false), Stroke::new(2.0, Color::BLACK));
        assert_eq!(style.tick_stroke(false, false), Stroke::new(1.0, Color::BLACK));
    }

    #[test]
    fn builder_overrides() {
        let style = FaceStyle::new().hand_lengths(50.0, 40.0, 90.0).radius(150.0);
        assert_eq!(style.radius, 150.0);
        assert!(!style.hands_are_ordered());
    }
}
