use crate::coords::Vec2;
use crate::paint::Color;

/// Text appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in logical units.
    pub size: f32,
    /// Font family; `None` leaves the choice to the renderer.
    pub family: Option<String>,
}

impl TextStyle {
    pub fn new(color: Color, size: f32) -> Self {
        Self { color, size, family: None }
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Center of the text block in logical units.
    pub center: Vec2,
    pub style: TextStyle,
}
