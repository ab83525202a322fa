use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    banks::BankRecord,
    errors::{PesoGrowError, Result},
};

/// Quarterly compounding, the convention for most Philippine deposit products.
pub const DEFAULT_COMPOUNDING_PERIODS: u32 = 4;
/// Flat final withholding tax on deposit interest.
pub const DEFAULT_WITHHOLDING_TAX_RATE: f64 = 0.20;
/// Pag-IBIG MP2 dividends are exempt from withholding tax.
pub const DEFAULT_TAX_EXEMPT_ID: &str = "pag-ibig-mp2";

/// Jurisdiction-level parameters for the earnings projection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatorConfig {
    #[serde(default = "CalculatorConfig::default_compounding_periods")]
    pub compounding_periods_per_year: u32,
    #[serde(default = "CalculatorConfig::default_withholding_tax_rate")]
    pub withholding_tax_rate: f64,
    /// Product ids treated as tax exempt in addition to records flagged `tax_exempt`.
    #[serde(default = "CalculatorConfig::default_tax_exempt_ids")]
    pub tax_exempt_ids: BTreeSet<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            compounding_periods_per_year: Self::default_compounding_periods(),
            withholding_tax_rate: Self::default_withholding_tax_rate(),
            tax_exempt_ids: Self::default_tax_exempt_ids(),
        }
    }
}

impl CalculatorConfig {
    pub fn default_compounding_periods() -> u32 {
        DEFAULT_COMPOUNDING_PERIODS
    }

    pub fn default_withholding_tax_rate() -> f64 {
        DEFAULT_WITHHOLDING_TAX_RATE
    }

    pub fn default_tax_exempt_ids() -> BTreeSet<String> {
        BTreeSet::from([DEFAULT_TAX_EXEMPT_ID.to_string()])
    }

    pub fn with_compounding_periods(mut self, periods: u32) -> Self {
        self.compounding_periods_per_year = periods;
        self
    }

    pub fn with_withholding_tax_rate(mut self, rate: f64) -> Self {
        self.withholding_tax_rate = rate;
        self
    }

    pub fn with_tax_exempt_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tax_exempt_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_tax_exempt(&self, bank: &BankRecord) -> bool {
        bank.tax_exempt || self.tax_exempt_ids.contains(&bank.id)
    }

    pub fn validate(&self) -> Result<()> {
        if self.compounding_periods_per_year == 0 {
            return Err(PesoGrowError::InvalidConfig(
                "compounding periods per year must be at least 1".into(),
            ));
        }
        let rate = self.withholding_tax_rate;
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            return Err(PesoGrowError::InvalidConfig(format!(
                "withholding tax rate must be between 0 and 1, got {rate}"
            )));
        }
        Ok(())
    }
}
