//! Time-of-day values and the sources they come from.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use chrono::Timelike;

/// Wall-clock time of day with whole-second resolution.
///
/// Invariant: `hours < 24`, `minutes < 60`, `seconds < 60`. There is no
/// leap-second representation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hours: 0, minutes: 0, seconds: 0 };

    /// Validated constructor; `None` if any field is out of range.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours < 24 && minutes < 60 && seconds < 60 {
            Some(Self { hours, minutes, seconds })
        } else {
            None
        }
    }

    /// Constructor for callers that already validated their input.
    ///
    /// Out-of-range fields are a contract violation; they are only caught by
    /// debug builds.
    pub fn from_hms_unchecked(hours: u8, minutes: u8, seconds: u8) -> Self {
        debug_assert!(hours < 24, "hours out of range: {hours}");
        debug_assert!(minutes < 60, "minutes out of range: {minutes}");
        debug_assert!(seconds < 60, "seconds out of range: {seconds}");
        Self { hours, minutes, seconds }
    }

    /// Reads the fields of any chrono time value.
    pub fn from_timelike<T: Timelike>(t: &T) -> Self {
        // chrono encodes leap seconds in the nanosecond field, so `second()` is always < 60.
        Self::from_hms_unchecked(t.hour() as u8, t.minute() as u8, t.second() as u8)
    }

    #[inline]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(self) -> u8 {
        self.seconds
    }

    /// Seconds elapsed since the start of the current half-day (0 or 12 o'clock).
    #[inline]
    pub const fn seconds_into_half_day(self) -> u32 {
        (self.hours as u32 % 12) * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}

/// Zero-padded `HH:MM:SS`.
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Failure to read a `HH:MM[:SS]` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTimeError {
    #[error("expected HH:MM or HH:MM:SS, got {0:?}")]
    Format(String),

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u8 },
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ParseTimeError::Format(s.to_owned());

        let mut fields = [0u8; 3];
        let mut count = 0;
        for part in s.trim().split(':') {
            if count == fields.len() || part.is_empty() || part.len() > 2 {
                return Err(format_err());
            }
            fields[count] = part.parse().map_err(|_| format_err())?;
            count += 1;
        }
        if count < 2 {
            return Err(format_err());
        }

        let [hours, minutes, seconds] = fields;
        for (field, value, limit) in [("hours", hours, 24), ("minutes", minutes, 60), ("seconds", seconds, 60)] {
            if value >= limit {
                return Err(ParseTimeError::OutOfRange { field, value });
            }
        }

        Ok(Self { hours, minutes, seconds })
    }
}

/// Which clock drives the face.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TimeSource {
    /// Host calendar clock.
    #[default]
    Real,
    /// Caller-supplied simulated time.
    Simulated,
}

/// Host calendar clock capability.
///
/// Implementations return the authoritative current time on every call; the
/// face never derives time by counting ticks.
pub trait WallClock {
    fn now(&self) -> TimeOfDay;
}

/// Local time of the host, read through chrono.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_timelike(&chrono::Local::now())
    }
}

/// Manually driven clock. Clones share the same time, so a host (or a test) can
/// keep one clone and move time while the face owns the other.
#[derive(Debug, Clone, Default)]
pub struct ManualClock(Rc<Cell<TimeOfDay>>);

impl ManualClock {
    pub fn new(time: TimeOfDay) -> Self {
        Self(Rc::new(Cell::new(time)))
    }

    pub fn set(&self, time: TimeOfDay) {
        self.0.set(time);
    }
}

impl WallClock for ManualClock {
    fn now(&self) -> TimeOfDay {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_rejects_out_of_range() {
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(0, 60, 0).is_none());
        assert!(TimeOfDay::new(0, 0, 60).is_none());
        assert!(TimeOfDay::new(23, 59, 59).is_some());
    }

    #[test]
    fn from_chrono_time() {
        let naive = chrono::NaiveTime::from_hms_opt(14, 30, 5).unwrap();
        assert_eq!(TimeOfDay::from_timelike(&naive), t(14, 30, 5));
    }

    #[test]
    fn half_day_folds_afternoon() {
        assert_eq!(t(14, 30, 0).seconds_into_half_day(), 9000);
        assert_eq!(t(2, 30, 0).seconds_into_half_day(), 9000);
        assert_eq!(t(12, 0, 0).seconds_into_half_day(), 0);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(t(14, 30, 0).to_string(), "14:30:00");
        assert_eq!(t(0, 5, 9).to_string(), "00:05:09");
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parse_full_and_short_forms() {
        assert_eq!("07:08:09".parse::<TimeOfDay>().unwrap(), t(7, 8, 9));
        assert_eq!("7:08".parse::<TimeOfDay>().unwrap(), t(7, 8, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "12", "12:", "1:2:3:4", "aa:bb", "123:00"] {
            assert!(
                matches!(bad.parse::<TimeOfDay>(), Err(ParseTimeError::Format(_))),
                "{bad:?} should be a format error"
            );
        }
    }

    #[test]
    fn parse_reports_range_field() {
        assert_eq!(
            "10:61:00".parse::<TimeOfDay>(),
            Err(ParseTimeError::OutOfRange { field: "minutes", value: 61 })
        );
    }

    // ── sources ───────────────────────────────────────────────────────────

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(TimeOfDay::MIDNIGHT);
        let observer = clock.clone();
        clock.set(t(9, 0, 0));
        assert_eq!(observer.now(), t(9, 0, 0));
    }

    #[test]
    fn system_clock_is_in_range() {
        let now = SystemClock.now();
        assert!(TimeOfDay::new(now.hours(), now.minutes(), now.seconds()).is_some());
    }

    #[test]
    fn default_source_is_real() {
        assert_eq!(TimeSource::default(), TimeSource::Real);
    }
}
