use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Normalized payslip figures. Replaced wholesale on every upload, never edited.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayRecord {
    pub gross_monthly: f64,
    pub net_monthly: f64,
    pub working_hours: f64,
    pub source_name: String,
    pub loaded_at: DateTime<Local>,
}

impl PayRecord {
    pub fn new(gross_monthly: f64, net_monthly: f64, working_hours: f64, source_name: String) -> Self {
        Self {
            gross_monthly,
            net_monthly,
            working_hours,
            source_name,
            loaded_at: Local::now(),
        }
    }

    /// Net monthly pay divided by the working seconds of the month.
    /// Zero when the hours can't produce a meaningful divisor.
    pub fn rate_per_second(&self) -> f64 {
        let seconds = self.working_hours * SECONDS_PER_HOUR;
        if !(seconds > 0.0) {
            return 0.0;
        }
        let rate = self.net_monthly / seconds;
        if rate.is_finite() { rate } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_per_second() {
        let record = PayRecord::new(2500.0, 1850.0, 160.0, "payslip.pdf".to_string());
        assert_eq!(record.rate_per_second(), 1850.0 / (160.0 * 3600.0));
        assert!((record.rate_per_second() - 0.0032118).abs() < 1e-7);
    }

    #[test]
    fn test_rate_guards_zero_hours() {
        let record = PayRecord::new(2500.0, 1850.0, 0.0, "zero.pdf".to_string());
        assert_eq!(record.rate_per_second(), 0.0);

        let negative = PayRecord::new(2500.0, 1850.0, -8.0, "neg.pdf".to_string());
        assert_eq!(negative.rate_per_second(), 0.0);

        let nan = PayRecord::new(2500.0, 1850.0, f64::NAN, "nan.pdf".to_string());
        assert_eq!(nan.rate_per_second(), 0.0);
    }
}
