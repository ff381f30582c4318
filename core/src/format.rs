use serde::{Deserialize, Serialize};

use crate::model::pay_record::SECONDS_PER_HOUR;

/// How money is rendered. Defaults follow the Italian euro convention: `1.850,0000 €`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
    pub fraction_digits: usize,
    pub symbol_after: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "€".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            fraction_digits: 4,
            symbol_after: true,
        }
    }
}

impl CurrencyFormat {
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut number = group_thousands(int_part, &self.thousands_separator);
        if let Some(frac) = frac_part {
            number.push_str(&self.decimal_separator);
            number.push_str(frac);
        }

        // A value that rounds to zero keeps no sign
        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        if self.symbol.is_empty() {
            format!("{}{}", sign, number)
        } else if self.symbol_after {
            format!("{}{} {}", sign, number, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, number)
        }
    }
}

fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// `HH:MM:SS`. Hours keep counting past 24.
pub fn format_elapsed(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        // Repeated additions can land a hair under a whole second
        (seconds + 1e-6).floor() as u64
    } else {
        0
    };
    let per_hour = SECONDS_PER_HOUR as u64;
    let hours = total / per_hour;
    let minutes = (total % per_hour) / 60;
    let secs = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
