use std::time::{Duration, Instant};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A repeating tick source. Holding the value keeps the schedule alive,
/// dropping it cancels every tick that hasn't fired yet.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// Number of ticks that came due up to `now`. Each tick is reported once.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let overdue = now - self.next_due;
        let missed = u32::try_from(overdue.as_nanos() / self.period.as_nanos()).unwrap_or(u32::MAX);
        let fired = missed.saturating_add(1);
        // A gap too long to step over resyncs on `now`
        self.next_due = self
            .period
            .checked_mul(fired)
            .and_then(|step| self.next_due.checked_add(step))
            .unwrap_or(now + self.period);
        fired
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
