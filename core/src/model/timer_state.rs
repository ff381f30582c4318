#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimerState {
    pub accumulated_earnings: f64,
    pub running: bool,
}

impl TimerState {
    pub fn clear(&mut self) {
        self.accumulated_earnings = 0.0;
        self.running = false;
    }
}
