use serde::{Deserialize, Serialize};

use super::category::BankCategory;

/// One savings or time-deposit product as published in a bank file.
///
/// Only `id`, `category`, `base_interest_rate`, `is_active` and `tax_exempt`
/// feed the calculator; the remaining fields are carried for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankRecord {
    #[serde(rename = "bankId")]
    pub id: String,
    pub bank_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub bank_type: String,
    pub category: BankCategory,
    /// Annual percentage, e.g. `4.5` for 4.5% p.a.
    pub base_interest_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_deposit_rate: Option<f64>,
    #[serde(default)]
    pub minimum_deposit: f64,
    #[serde(default)]
    pub website: String,
    #[serde(default = "BankRecord::default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_philippines_licensed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_details: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_features: Vec<String>,
    /// Interest on this product is not subject to withholding tax.
    #[serde(default)]
    pub tax_exempt: bool,
}

impl BankRecord {
    /// Creates an active, taxable record with empty display fields.
    pub fn new(
        id: impl Into<String>,
        bank_name: impl Into<String>,
        category: BankCategory,
        base_interest_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            bank_name: bank_name.into(),
            logo_url: None,
            bank_type: String::new(),
            category,
            base_interest_rate,
            promo_interest_rate: None,
            time_deposit_rate: None,
            minimum_deposit: 0.0,
            website: String::new(),
            is_active: true,
            description: None,
            is_philippines_licensed: None,
            promo_details: None,
            special_features: Vec::new(),
            tax_exempt: false,
        }
    }

    pub fn with_tax_exempt(mut self, tax_exempt: bool) -> Self {
        self.tax_exempt = tax_exempt;
        self
    }

    pub fn with_promo_rate(mut self, rate: f64) -> Self {
        self.promo_interest_rate = Some(rate);
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Promo rate worth advertising: present and different from the base rate.
    pub fn distinct_promo_rate(&self) -> Option<f64> {
        self.promo_interest_rate
            .filter(|promo| *promo > 0.0 && (promo - self.base_interest_rate).abs() > f64::EPSILON)
    }

    fn default_active() -> bool {
        true
    }
}
