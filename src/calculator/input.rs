use serde::{Deserialize, Serialize};

use crate::errors::{PesoGrowError, Result};

pub const DEFAULT_PRINCIPAL: f64 = 100_000.0;
pub const DEFAULT_DURATION_MONTHS: u32 = 12;

/// Holding periods offered by the calculator form.
pub const DURATION_PRESETS: [u32; 6] = [6, 12, 24, 36, 48, 60];

/// One-tap deposit amounts.
pub const QUICK_AMOUNTS: [f64; 5] = [10_000.0, 50_000.0, 100_000.0, 500_000.0, 1_000_000.0];

/// Deposit amount and holding period supplied by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorInput {
    pub principal: f64,
    pub duration_months: u32,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            duration_months: DEFAULT_DURATION_MONTHS,
        }
    }
}

impl CalculatorInput {
    pub fn new(principal: f64, duration_months: u32) -> Self {
        Self {
            principal,
            duration_months,
        }
    }

    pub fn years(&self) -> f64 {
        f64::from(self.duration_months) / 12.0
    }

    /// Rejects inputs that would otherwise surface as NaN or infinite earnings.
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() {
            return Err(PesoGrowError::InvalidInput(format!(
                "principal must be a finite amount, got {}",
                self.principal
            )));
        }
        if self.principal < 0.0 {
            return Err(PesoGrowError::InvalidInput(format!(
                "principal cannot be negative, got {}",
                self.principal
            )));
        }
        if self.duration_months == 0 {
            return Err(PesoGrowError::InvalidInput(
                "duration must be at least one month".into(),
            ));
        }
        Ok(())
    }
}

/// Reads a typed amount the way the deposit field does: every non-digit is
/// dropped (so `"100,000"` and `"₱ 50 000"` both parse) and an empty result is zero.
pub fn parse_amount(text: &str) -> f64 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().map(|value| value as f64).unwrap_or(0.0)
}

/// Reads an amount typed on the command line. Grouping characters (`,`, `₱`
/// and whitespace) are dropped; anything else must form a plain number, so a
/// sign or decimal point is kept for [`CalculatorInput::validate`] to judge.
pub fn parse_amount_arg(text: &str) -> Result<f64> {
    let cleaned: String = text
        .chars()
        .filter(|ch| *ch != ',' && *ch != '₱' && !ch.is_whitespace())
        .collect();
    cleaned.parse::<f64>().map_err(|_| {
        PesoGrowError::InvalidInput(format!("`{text}` is not a valid amount"))
    })
}

/// Human label for a holding period, e.g. `"6 months"` or `"2 years"`.
pub fn duration_label(months: u32) -> String {
    match months {
        12 => "1 year".to_string(),
        m if m > 0 && m % 12 == 0 => format!("{} years", m / 12),
        1 => "1 month".to_string(),
        m => format!("{m} months"),
    }
}
