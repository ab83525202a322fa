//! Currency, percentage and date formatting for comparison output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("PHP")
    }
}

/// Number formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            language_tag: "en-PH".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "PHP" => "₱".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => format!("{code} "),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `value` with fixed `precision` and thousands grouping.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let fixed = format!("{:.*}", precision as usize, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, locale.grouping_separator));
    if let Some(frac) = frac_part {
        out.push(locale.decimal_separator);
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount with the currency's minor units, e.g. `₱103,248.32`.
pub fn format_currency_value(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    format_currency_with_precision(amount, code, locale, minor_units_for(code.as_str()))
}

/// Formats a rounded amount without decimals, e.g. `₱100,000`.
pub fn format_currency_whole(amount: f64, code: &CurrencyCode, locale: &LocaleConfig) -> String {
    format_currency_with_precision(amount, code, locale, 0)
}

pub fn format_currency_with_precision(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    precision: u8,
) -> String {
    let body = format_number(locale, amount, precision);
    let symbol = symbol_for(code.as_str());
    match body.strip_prefix('-') {
        Some(magnitude) => format!("-{symbol}{magnitude}"),
        None => format!("{symbol}{body}"),
    }
}

/// Annual rate as shown next to each bank, e.g. `4.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Date stamp for the "As of ..." line, e.g. `October 16, 2026`.
pub fn format_last_updated(stamp: &DateTime<Utc>) -> String {
    stamp.format("%B %-d, %Y").to_string()
}
