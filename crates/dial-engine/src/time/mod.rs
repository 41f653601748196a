//! Time subsystem.
//!
//! Provides a fixed-interval scheduler without coupling to any runtime.
//! Intended usage:
//! - one `Ticker` per periodically updated view
//! - call `wait()` (blocking hosts) or `poll(now)` (event-loop hosts) and drive
//!   the view's `tick()` whenever a `TickInfo` comes back
//! - call `cancel()` on teardown to end the registration

mod ticker;

pub use ticker::{Ticker, TickInfo, DEFAULT_INTERVAL};
