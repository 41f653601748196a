//! Scene (retained drawing surface) types.
//!
//! Responsibilities:
//! - define the `DrawSurface` capability consumed by the clock face
//! - store drawn elements with ownership handles and visibility flags
//! - provide deterministic paint order (z-index + creation order)
//! - serialize the visible scene to SVG

mod cmd;
mod handle;
mod retained;
mod surface;
mod svg;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use handle::Handle;
pub use retained::{Scene, SceneItem, SceneStats};
pub use shapes::{CircleStyle, TextStyle};
pub use surface::DrawSurface;
pub use z_index::{SortKey, ZIndex};
