use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};
use tokio::time::Instant;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Time left until the wall clock reaches its next whole second.
pub fn until_next_second(now: NaiveDateTime) -> Duration {
    // Leap seconds report a nanosecond field past one billion.
    let elapsed = now.nanosecond() % NANOS_PER_SECOND;
    Duration::from_nanos(u64::from(NANOS_PER_SECOND - elapsed))
}

/// Monotonic deadline for the next tick, measured from `mono` which must be
/// sampled together with the wall clock reading `now`.
pub fn next_deadline(mono: Instant, now: NaiveDateTime) -> Instant {
    mono + until_next_second(now)
}
