use std::time::{Duration, Instant};

use crate::model::pay_record::PayRecord;
use crate::model::timer_state::TimerState;
use crate::schedule::Ticker;

/// Each tick stands for one second of work.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Turns a per-second rate into a growing total while running.
///
/// The tick source is owned here: it exists exactly while `state.running`
/// is true. Every transition out of running drops it.
pub struct AccrualTimer {
    record: Option<PayRecord>,
    rate_per_second: f64,
    state: TimerState,
    ticker: Option<Ticker>,
}

impl Default for AccrualTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccrualTimer {
    pub fn new() -> Self {
        Self {
            record: None,
            rate_per_second: 0.0,
            state: TimerState::default(),
            ticker: None,
        }
    }

    pub fn pay_record(&self) -> Option<&PayRecord> {
        self.record.as_ref()
    }

    pub fn rate_per_second(&self) -> f64 {
        self.rate_per_second
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn accumulated_earnings(&self) -> f64 {
        self.state.accumulated_earnings
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn can_start(&self) -> bool {
        self.record.is_some() && self.rate_per_second > 0.0
    }

    /// Seconds of work the current total stands for.
    pub fn elapsed_seconds(&self) -> f64 {
        if self.rate_per_second > 0.0 {
            self.state.accumulated_earnings / self.rate_per_second
        } else {
            0.0
        }
    }

    pub fn start(&mut self, now: Instant) -> bool {
        if !self.can_start() {
            tracing::debug!("Start ignored: no usable pay record");
            return false;
        }
        // Drops any schedule still held so only one tick source exists
        self.ticker = Some(Ticker::new(TICK_PERIOD, now));
        self.state.running = true;
        tracing::debug!(earnings = self.state.accumulated_earnings, "Timer started");
        true
    }

    pub fn pause(&mut self) {
        self.release();
        self.state.running = false;
        tracing::debug!(earnings = self.state.accumulated_earnings, "Timer paused");
    }

    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.state.running {
            self.pause();
            false
        } else {
            self.start(now)
        }
    }

    pub fn reset(&mut self) {
        self.release();
        self.state.clear();
        tracing::debug!("Timer reset");
    }

    pub fn tick(&mut self) {
        self.accrue(1);
    }

    /// Fires every tick that came due since the last poll.
    pub fn poll(&mut self, now: Instant) -> u32 {
        self.poll_at_most(now, u32::MAX)
    }

    /// Like `poll`, but fires no more than `max` ticks. Due ticks past the cap are dropped.
    pub fn poll_at_most(&mut self, now: Instant, max: u32) -> u32 {
        let due = match self.ticker.as_mut() {
            Some(ticker) => ticker.due_ticks(now),
            None => return 0,
        };
        let fired = due.min(max);
        self.accrue(fired);
        fired
    }

    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref().map(|t| t.until_next(now))
    }

    pub fn load_pay_record(&mut self, record: PayRecord) {
        self.release();
        self.rate_per_second = record.rate_per_second();
        tracing::info!(
            name = %record.source_name,
            rate = self.rate_per_second,
            "Pay record loaded"
        );
        self.record = Some(record);
        self.state.clear();
    }

    pub fn unload(&mut self) {
        self.release();
        self.record = None;
        self.rate_per_second = 0.0;
        self.state.clear();
        tracing::info!("Pay record discarded");
    }

    fn accrue(&mut self, ticks: u32) {
        if !self.state.running || self.rate_per_second <= 0.0 || ticks == 0 {
            return;
        }
        self.state.accumulated_earnings += self.rate_per_second * f64::from(ticks);
    }

    fn release(&mut self) {
        self.ticker = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PayRecord {
        PayRecord::new(2500.0, 1850.0, 160.0, "payslip.pdf".to_string())
    }

    #[test]
    fn test_start_without_record_is_noop() {
        let mut timer = AccrualTimer::new();
        assert!(!timer.start(Instant::now()));
        assert!(!timer.is_running());
        assert!(timer.next_tick_in(Instant::now()).is_none());

        timer.tick();
        assert_eq!(timer.accumulated_earnings(), 0.0);
        assert_eq!(timer.elapsed_seconds(), 0.0);
    }

    #[test]
    fn test_load_derives_rate() {
        let mut timer = AccrualTimer::new();
        assert_eq!(timer.rate_per_second(), 0.0);

        timer.load_pay_record(sample_record());
        assert_eq!(timer.rate_per_second(), 1850.0 / (160.0 * 3600.0));
        assert_eq!(timer.pay_record().map(|r| r.source_name.as_str()), Some("payslip.pdf"));
    }

    #[test]
    fn test_zero_rate_record_cannot_start() {
        let mut timer = AccrualTimer::new();
        timer.load_pay_record(PayRecord::new(2500.0, 1850.0, 0.0, "broken.pdf".to_string()));

        assert!(!timer.can_start());
        assert!(!timer.start(Instant::now()));
        timer.tick();
        assert_eq!(timer.accumulated_earnings(), 0.0);
        assert!(!timer.accumulated_earnings().is_nan());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut timer = AccrualTimer::new();
        timer.load_pay_record(sample_record());
        let now = Instant::now();

        assert!(timer.toggle(now));
        assert!(timer.is_running());
        assert!(!timer.toggle(now));
        assert!(!timer.is_running());
        assert!(timer.next_tick_in(now).is_none());
    }

    #[test]
    fn test_unload_discards_everything() {
        let mut timer = AccrualTimer::new();
        timer.load_pay_record(sample_record());
        let now = Instant::now();
        timer.start(now);
        timer.poll(now + Duration::from_secs(5));

        timer.unload();
        assert!(timer.pay_record().is_none());
        assert_eq!(timer.rate_per_second(), 0.0);
        assert_eq!(timer.state(), TimerState::default());
        assert_eq!(timer.poll(now + Duration::from_secs(10)), 0);
        assert!(!timer.start(now));
    }

    #[test]
    fn test_poll_at_most_caps_batch() {
        let mut timer = AccrualTimer::new();
        timer.load_pay_record(sample_record());
        let now = Instant::now();
        timer.start(now);

        assert_eq!(timer.poll_at_most(now + TICK_PERIOD * 10, 3), 3);
        assert!((timer.accumulated_earnings() - 3.0 * timer.rate_per_second()).abs() < 1e-12);
        // The surplus was dropped, not queued
        assert_eq!(timer.poll(now + TICK_PERIOD * 10), 0);
        assert_eq!(timer.poll_at_most(now + TICK_PERIOD * 11, 0), 0);
    }
}
