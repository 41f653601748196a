//! Time → geometry calculator.
//!
//! Pure and stateless: every function maps its arguments to angles or points
//! relative to the face center, with 0 rad at 12 o'clock and angles growing
//! clockwise. Nothing here depends on the drawing surface.

use core::f64::consts::TAU;

use dial_engine::coords::Vec2;

use crate::time::TimeOfDay;

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;

/// The face shows 12 hours, not 24.
pub const HOURS_PER_HALF_DAY: u32 = 12;
pub const SECONDS_PER_HALF_DAY: u32 = SECONDS_PER_HOUR * HOURS_PER_HALF_DAY;

pub const TICK_COUNT: usize = 60;
pub const LABEL_COUNT: usize = 12;

/// Every 5th tick is long.
pub const LONG_TICK_STEPS: usize = 5;
/// Every 15th tick marks a quarter.
pub const QUARTER_TICK_STEPS: usize = 15;

/// Second hand (and tick spacing) advance per second.
pub const SECOND_STEP: f64 = TAU / SECONDS_PER_MINUTE as f64;
/// Minute hand advance per second.
pub const MINUTE_STEP: f64 = TAU / SECONDS_PER_HOUR as f64;
/// Hour hand advance per second.
pub const HOUR_STEP: f64 = TAU / SECONDS_PER_HALF_DAY as f64;
/// Spacing between hour labels.
pub const LABEL_STEP: f64 = TAU / HOURS_PER_HALF_DAY as f64;

/// Angle in radians, normalized to `[0, 2π)`, clockwise from 12 o'clock.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct HandAngle(f64);

impl HandAngle {
    pub const ZERO: HandAngle = HandAngle(0.0);

    /// Wraps any finite angle into `[0, 2π)`.
    pub fn from_radians(radians: f64) -> Self {
        let r = radians.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs.
        Self(if r >= TAU { 0.0 } else { r })
    }

    /// `units` steps out of `per_revolution` steps for a full turn.
    ///
    /// Equivalent to `units × (2π / per_revolution)`, but the revolution fraction
    /// is formed first so quarter positions come out exact.
    fn of_revolution(units: u32, per_revolution: u32) -> Self {
        let fraction = f64::from(units % per_revolution) / f64::from(per_revolution);
        Self::from_radians(TAU * fraction)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

/// Angles of the three hands for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct HandAngles {
    pub hour: HandAngle,
    pub minute: HandAngle,
    pub second: HandAngle,
}

/// Computes sweep-motion hand angles for `t`.
///
/// Seconds feed the minute hand and minutes + seconds feed the hour hand, so
/// the larger hands never jump at a rollover. Within a half-day every angle is
/// a non-decreasing function of time.
///
/// Precondition: `t` is a valid [`TimeOfDay`] (guaranteed by its constructors).
pub fn compute_hand_angles(t: TimeOfDay) -> HandAngles {
    let seconds = u32::from(t.seconds());
    let minutes = u32::from(t.minutes());

    HandAngles {
        second: HandAngle::of_revolution(seconds, SECONDS_PER_MINUTE),
        minute: HandAngle::of_revolution(minutes * SECONDS_PER_MINUTE + seconds, SECONDS_PER_HOUR),
        hour: HandAngle::of_revolution(t.seconds_into_half_day(), SECONDS_PER_HALF_DAY),
    }
}

/// Tip of a hand of `length` at `angle`, relative to the face center.
///
/// `x = sin(angle) × length`, `y = −cos(angle) × length` (screen y grows down).
#[inline]
pub fn hand_endpoint(angle: HandAngle, length: f32) -> Vec2 {
    Vec2::polar(angle.radians(), length)
}

/// One of the 60 minute/second marks around the rim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickMark {
    pub index: usize,
    pub is_long: bool,
    pub is_quarter: bool,
    pub angle: HandAngle,
    /// Inner end, relative to the face center.
    pub start: Vec2,
    /// Outer end (on the rim), relative to the face center.
    pub end: Vec2,
}

#[inline]
pub fn is_long_tick(index: usize) -> bool {
    index % LONG_TICK_STEPS == 0
}

#[inline]
pub fn is_quarter_tick(index: usize) -> bool {
    index % QUARTER_TICK_STEPS == 0
}

/// Geometry of the 60 rim ticks. Tick `i` sits at `i × SECOND_STEP` and runs
/// inwards from `radius` by its length (`long_length` for every 5th tick,
/// `short_length` otherwise).
pub fn tick_geometry(radius: f32, short_length: f32, long_length: f32) -> [TickMark; TICK_COUNT] {
    core::array::from_fn(|index| {
        let angle = HandAngle::of_revolution(index as u32, TICK_COUNT as u32);
        let is_long = is_long_tick(index);
        let length = if is_long { long_length } else { short_length };

        TickMark {
            index,
            is_long,
            is_quarter: is_quarter_tick(index),
            angle,
            start: Vec2::polar(angle.radians(), radius - length),
            end: Vec2::polar(angle.radians(), radius),
        }
    })
}

/// An hour numeral on the dial.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HourLabel {
    /// 1–12; position 0 is labelled 12.
    pub value: u8,
    pub angle: HandAngle,
    /// Label center, relative to the face center.
    pub position: Vec2,
}

/// Geometry of the 12 hour labels at `label_radius` from the center, starting
/// with "12" at the top.
pub fn hour_label_geometry(label_radius: f32) -> [HourLabel; LABEL_COUNT] {
    core::array::from_fn(|index| {
        let angle = HandAngle::of_revolution(index as u32, LABEL_COUNT as u32);
        HourLabel {
            value: if index == 0 { 12 } else { index as u8 },
            angle,
            position: Vec2::polar(angle.radians(), label_radius),
        }
    })
}
