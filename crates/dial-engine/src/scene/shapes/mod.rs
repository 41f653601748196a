pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod text;

pub use circle::{CircleCmd, CircleStyle};
pub use line::LineCmd;
pub use text::{TextCmd, TextStyle};
