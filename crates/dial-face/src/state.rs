use crate::time::{TimeOfDay, TimeSource, WallClock};

/// User-controlled display settings, owned by the face.
///
/// Two independent visibility flags plus the time source selection; there is
/// no other state machine.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub digital_clock_visible: bool,
    pub hour_labels_visible: bool,
    pub time_source: TimeSource,
    /// Used only while `time_source` is [`TimeSource::Simulated`].
    pub simulated_time: TimeOfDay,
}

impl DisplayState {
    /// The time a tick should render: the host clock or the simulated value.
    pub fn effective_time(&self, clock: &impl WallClock) -> TimeOfDay {
        match self.time_source {
            TimeSource::Real => clock.now(),
            TimeSource::Simulated => self.simulated_time,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            digital_clock_visible: true,
            hour_labels_visible: true,
            time_source: TimeSource::Real,
            simulated_time: TimeOfDay::MIDNIGHT,
        }
    }
}
