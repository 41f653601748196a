use std::time::{Duration, Instant};

/// Nominal period of a clock face update.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Snapshot handed out for every fired tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickInfo {
    /// Monotonic tick counter, starting at 0.
    pub index: u64,

    /// Timestamp the tick was observed at.
    pub now: Instant,

    /// Actual time since the previous tick (or since the ticker started).
    pub elapsed: Duration,

    /// Whole intervals that passed without a tick, e.g. while the process was
    /// suspended. Missed ticks are reported here, never replayed.
    pub missed: u32,
}

/// Fixed-interval scheduler.
///
/// Ticks are nominally `interval` apart but the exact period is not guaranteed:
/// a tick observed late keeps the original cadence, and after a stall longer
/// than one interval the ticker fires once and re-aligns to `now + interval`
/// instead of bursting through the backlog.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
    last: Instant,
    tick_index: u64,
    cancelled: bool,
}

impl Ticker {
    /// Creates a ticker whose first tick is due one interval from now.
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(Instant::now(), interval)
    }

    /// Creates a ticker with an explicit baseline.
    pub fn starting_at(start: Instant, interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Self {
            interval,
            next_due: start + interval,
            last: start,
            tick_index: 0,
            cancelled: false,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Ends the registration. A cancelled ticker never fires again.
    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::debug!("ticker cancelled after {} ticks", self.tick_index);
        }
        self.cancelled = true;
    }

    /// Re-aligns the schedule so the next tick is one interval after `now`.
    ///
    /// Useful when resuming from suspension.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
        self.next_due = now + self.interval;
    }

    /// Time left until the next tick is due, or `None` once cancelled.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        (!self.cancelled).then(|| self.next_due.saturating_duration_since(now))
    }

    /// Fires a tick if one is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<TickInfo> {
        if self.cancelled || now < self.next_due {
            return None;
        }

        let late = now.saturating_duration_since(self.next_due);
        let missed = u32::try_from(late.as_nanos() / self.interval.as_nanos()).unwrap_or(u32::MAX);

        if missed > 0 {
            log::debug!("ticker stalled, skipping {missed} interval(s)");
            self.next_due = now + self.interval;
        } else {
            self.next_due += self.interval;
        }

        let info = TickInfo {
            index: self.tick_index,
            now,
            elapsed: now.saturating_duration_since(self.last),
            missed,
        };

        self.last = now;
        self.tick_index = self.tick_index.wrapping_add(1);

        Some(info)
    }

    /// Blocks the current thread until the next tick and returns it.
    ///
    /// Returns `None` immediately if the ticker is cancelled.
    pub fn wait(&mut self) -> Option<TickInfo> {
        loop {
            let now = Instant::now();
            if let Some(info) = self.poll(now) {
                return Some(info);
            }
            std::thread::sleep(self.time_until_next(now)?);
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
