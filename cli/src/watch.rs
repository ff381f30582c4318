use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use anyhow::{bail, Result};
use chrono::Local;
use paytick_core::{format_elapsed, AccrualTimer, CurrencyFormat, PayRecord};

/// A running timer that stops after an optional number of ticks.
struct WatchCounter {
    timer: AccrualTimer,
    remaining: Option<u32>,
}

impl WatchCounter {
    fn start(record: PayRecord, limit: Option<u32>, now: Instant) -> Result<Self> {
        let mut timer = AccrualTimer::new();
        timer.load_pay_record(record);
        if !timer.start(now) {
            bail!("This payslip has no usable per-second rate");
        }
        Ok(Self { timer, remaining: limit })
    }

    fn is_done(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Fires the ticks due at `now`, never more than the limit has left.
    fn advance(&mut self, now: Instant) -> u32 {
        let cap = self.remaining.unwrap_or(u32::MAX);
        let fired = self.timer.poll_at_most(now, cap);
        if let Some(left) = self.remaining.as_mut() {
            *left -= fired;
        }
        if self.is_done() {
            self.timer.pause();
        }
        fired
    }
}

/// Headless counter: one line, rewritten on every tick.
pub fn run_watch(currency: &CurrencyFormat, record: PayRecord, limit: Option<u32>) -> Result<()> {
    let mut counter = WatchCounter::start(record, limit, Instant::now())?;
    let timer = &counter.timer;

    println!(
        "{}: {} per second, started at {}",
        timer.pay_record().map(|r| r.source_name.as_str()).unwrap_or("-"),
        currency.format(timer.rate_per_second()),
        Local::now().format("%H:%M:%S"),
    );

    let mut stdout = io::stdout();
    while !counter.is_done() {
        if let Some(wait) = counter.timer.next_tick_in(Instant::now()) {
            thread::sleep(wait);
        }
        if counter.advance(Instant::now()) == 0 {
            continue;
        }
        write!(
            stdout,
            "\r{}  Time: {}",
            currency.format(counter.timer.accumulated_earnings()),
            format_elapsed(counter.timer.elapsed_seconds()),
        )?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
