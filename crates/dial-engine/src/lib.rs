//! Dial engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by the clock face: geometry,
//! colors, the retained drawing surface and the tick scheduler.

pub mod time;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod scene;
