use crate::scene::shapes::{CircleCmd, LineCmd, TextCmd};

/// Renderer-agnostic description of one scene element.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - add a draw method to `DrawSurface` and implement it for `Scene`
/// - teach `svg` how to serialize it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}

impl DrawCmd {
    /// Short tag used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Line(_) => "line",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Text(_) => "text",
        }
    }
}
