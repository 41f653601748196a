//! Analog clock face.
//!
//! Turns a time of day plus a handful of display toggles into vector
//! primitives on a [`DrawSurface`](dial_engine::scene::DrawSurface), and keeps
//! them current with one [`ClockFace::tick`] per second.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`angles`] | pure time → angle / tick / label geometry |
//! | [`time`] | `TimeOfDay`, `TimeSource`, `WallClock` implementations |
//! | [`style`] | `FaceStyle` colors, widths and lengths |
//! | [`menu`] | settings menu model feeding the face's setters |
//! | `face` | `ClockFace`: static dial, per-tick redraw, visibility, teardown |

pub mod angles;
pub mod error;
pub mod menu;
pub mod style;
pub mod time;

mod face;
mod primitives;
mod state;

pub use angles::{compute_hand_angles, hand_endpoint, HandAngle, HandAngles, HourLabel, TickMark};
pub use error::{FaceError, Result};
pub use face::{ClockFace, Frame};
pub use menu::{Menu, MenuError, TimeField};
pub use state::DisplayState;
pub use style::FaceStyle;
pub use time::{ManualClock, ParseTimeError, SystemClock, TimeOfDay, TimeSource, WallClock};
