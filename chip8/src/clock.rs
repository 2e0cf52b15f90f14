use std::time::{Duration, Instant};

/// How far a clock may fall behind before the backlog is dropped.
const MAX_LAG: Duration = Duration::from_millis(250);

/// # Clock
/// Hands out ticks at a fixed rate against wall-clock time.
///
/// The frame loop asks each clock how many ticks came due since it last asked,
/// so the instruction rate and the 60Hz timer rate stay independent of how
/// often the loop itself runs.
pub struct Clock {
    interval: Duration,
    last_tick: Instant,
}

impl Clock {
    /// # Arguments
    /// * `hz` ticks per second, above 0
    /// * `now` when counting starts
    pub fn new(hz: u32, now: Instant) -> Self {
        Clock {
            interval: Duration::from_nanos(1_000_000_000 / u64::from(hz.max(1))),
            last_tick: now,
        }
    }

    /// Number of whole ticks elapsed by `now`, at most `MAX_LAG` worth.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        if now.saturating_duration_since(self.last_tick) > MAX_LAG {
            if let Some(start) = now.checked_sub(MAX_LAG) {
                self.last_tick = start;
            }
        }

        let mut ticks = 0;
        while now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick += self.interval;
            ticks += 1;
        }
        ticks
    }
}
