use serde::{Deserialize, Serialize};

use crate::banks::BankRecord;

use super::{config::CalculatorConfig, input::CalculatorInput};

/// Projected earnings for one bank over the requested holding period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EarningsResult {
    pub bank: BankRecord,
    pub principal: f64,
    pub gross_interest: f64,
    pub tax_amount: f64,
    pub net_interest: f64,
    pub total_amount: f64,
    pub monthly_earnings: f64,
    /// Annual rate the projection used; currently the base rate.
    pub effective_rate: f64,
    pub tax_exempt: bool,
    /// Withholding rate applied to gross interest (zero when exempt).
    pub tax_rate: f64,
}

/// Projects a single bank's earnings. Inputs are assumed validated.
///
/// `A = P (1 + r/n)^(n t)` with `n` compounding periods per year and `t` in
/// (possibly fractional) years, then a flat withholding on the interest.
pub fn project_earnings(
    bank: &BankRecord,
    input: &CalculatorInput,
    config: &CalculatorConfig,
) -> EarningsResult {
    let principal = input.principal;
    let rate = bank.base_interest_rate / 100.0;
    let periods = f64::from(config.compounding_periods_per_year);

    let total_before_tax = principal * (1.0 + rate / periods).powf(periods * input.years());
    let gross_interest = total_before_tax - principal;

    let tax_exempt = config.is_tax_exempt(bank);
    let tax_rate = if tax_exempt {
        0.0
    } else {
        config.withholding_tax_rate
    };
    let tax_amount = if tax_exempt {
        0.0
    } else {
        gross_interest * tax_rate
    };
    let net_interest = gross_interest - tax_amount;

    EarningsResult {
        bank: bank.clone(),
        principal,
        gross_interest,
        tax_amount,
        net_interest,
        total_amount: principal + net_interest,
        monthly_earnings: net_interest / f64::from(input.duration_months),
        effective_rate: bank.base_interest_rate,
        tax_exempt,
        tax_rate,
    }
}
