//! Settings menu model.
//!
//! Mirrors the controls a host shows next to the face: a time-source radio
//! group, hour / minute / second inputs that are only enabled while the
//! simulated source is selected, and checkboxes for the digital readout and the
//! hour labels. Input is validated here, so the face only ever receives
//! in-range values.

use dial_engine::scene::DrawSurface;

use crate::error::FaceError;
use crate::face::ClockFace;
use crate::state::DisplayState;
use crate::time::{TimeOfDay, TimeSource, WallClock};

/// One of the numeric time inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    /// Exclusive upper bound of the field.
    pub const fn limit(self) -> u8 {
        match self {
            TimeField::Hours => 24,
            TimeField::Minutes | TimeField::Seconds => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("{} input is disabled while the real clock is selected", .0.name())]
    InputDisabled(TimeField),

    #[error("{} must be below {}, got {value}", .field.name(), .field.limit())]
    OutOfRange { field: TimeField, value: u32 },

    #[error("{} input is not a number: {raw:?}", .field.name())]
    NotANumber { field: TimeField, raw: String },

    #[error(transparent)]
    Face(#[from] FaceError),
}

/// Current values of the menu controls.
///
/// The radio group holds a single [`TimeSource`], so exactly one option is
/// selected at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    source: TimeSource,
    hours: u8,
    minutes: u8,
    seconds: u8,
    show_digital: bool,
    show_labels: bool,
}

impl Menu {
    /// Menu reflecting a face's current settings.
    pub fn from_state(state: &DisplayState) -> Self {
        let time = state.simulated_time;
        Self {
            source: state.time_source,
            hours: time.hours(),
            minutes: time.minutes(),
            seconds: time.seconds(),
            show_digital: state.digital_clock_visible,
            show_labels: state.hour_labels_visible,
        }
    }

    #[inline]
    pub fn source(&self) -> TimeSource {
        self.source
    }

    #[inline]
    pub fn show_digital(&self) -> bool {
        self.show_digital
    }

    #[inline]
    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// The numeric inputs only accept edits while the simulated source is selected.
    #[inline]
    pub fn time_inputs_enabled(&self) -> bool {
        self.source == TimeSource::Simulated
    }

    /// Time described by the three numeric inputs.
    pub fn simulated_time(&self) -> TimeOfDay {
        TimeOfDay::from_hms_unchecked(self.hours, self.minutes, self.seconds)
    }

    /// Radio selection. Choosing the simulated source also hands the current
    /// input values to the face; both take effect on the face's next tick.
    pub fn select_source<S, C>(&mut self, face: &mut ClockFace<S, C>, source: TimeSource) -> Result<(), MenuError>
    where
        S: DrawSurface,
        C: WallClock,
    {
        face.set_time_source(source)?;
        if source == TimeSource::Simulated {
            face.set_simulated_time(self.simulated_time())?;
        }
        self.source = source;
        Ok(())
    }

    /// Numeric input edit.
    pub fn set_field<S, C>(&mut self, face: &mut ClockFace<S, C>, field: TimeField, value: u32) -> Result<(), MenuError>
    where
        S: DrawSurface,
        C: WallClock,
    {
        if !self.time_inputs_enabled() {
            return Err(MenuError::InputDisabled(field));
        }

        let value = u8::try_from(value)
            .ok()
            .filter(|v| *v < field.limit())
            .ok_or(MenuError::OutOfRange { field, value })?;

        let mut next = self.clone();
        match field {
            TimeField::Hours => next.hours = value,
            TimeField::Minutes => next.minutes = value,
            TimeField::Seconds => next.seconds = value,
        }

        face.set_simulated_time(next.simulated_time())?;
        *self = next;
        Ok(())
    }

    /// Numeric input edit from raw text, as typed by the user.
    pub fn enter_field<S, C>(&mut self, face: &mut ClockFace<S, C>, field: TimeField, raw: &str) -> Result<(), MenuError>
    where
        S: DrawSurface,
        C: WallClock,
    {
        let value = raw.trim().parse::<u32>().map_err(|_| MenuError::NotANumber {
            field,
            raw: raw.to_owned(),
        })?;
        self.set_field(face, field, value)
    }

    /// "Show digital clock" checkbox.
    pub fn set_show_digital<S, C>(&mut self, face: &mut ClockFace<S, C>, checked: bool) -> Result<(), MenuError>
    where
        S: DrawSurface,
        C: WallClock,
    {
        face.set_digital_clock_visible(checked)?;
        self.show_digital = checked;
        Ok(())
    }

    /// "Show hour labels" checkbox.
    pub fn set_show_labels<S, C>(&mut self, face: &mut ClockFace<S, C>, checked: bool) -> Result<(), MenuError>
    where
        S: DrawSurface,
        C: WallClock,
    {
        face.set_hour_labels_visible(checked)?;
        self.show_labels = checked;
        Ok(())
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::from_state(&DisplayState::default())
    }
}
