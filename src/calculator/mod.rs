//! Compound-interest earnings projection and display ranking.

pub mod config;
pub mod earnings;
pub mod input;
pub mod ranking;

pub use config::CalculatorConfig;
pub use earnings::{project_earnings, EarningsResult};
pub use input::{duration_label, parse_amount, parse_amount_arg, CalculatorInput};
pub use ranking::{rank, ranking_key, RankKey};

use crate::{
    banks::BankRecord,
    errors::{PesoGrowError, Result},
};

/// Projects earnings for every bank and returns them in display order.
///
/// Produces exactly one result per input record. Callers are expected to have
/// dropped inactive records already. Validation happens up front, so a bad
/// input or rate fails the whole call rather than yielding partial output.
pub fn calculate_earnings(
    banks: &[BankRecord],
    input: &CalculatorInput,
    config: &CalculatorConfig,
) -> Result<Vec<EarningsResult>> {
    config.validate()?;
    input.validate()?;
    for bank in banks {
        validate_rate(bank)?;
    }

    let mut results: Vec<EarningsResult> = banks
        .iter()
        .map(|bank| project_earnings(bank, input, config))
        .collect();
    if let Some(overflow) = results.iter().find(|result| !projection_is_finite(result)) {
        return Err(PesoGrowError::InvalidInput(format!(
            "principal {} is too large to project at {}% for {} months",
            input.principal, overflow.bank.base_interest_rate, input.duration_months
        )));
    }
    rank(&mut results);

    tracing::debug!(
        banks = results.len(),
        principal = input.principal,
        months = input.duration_months,
        "calculated earnings"
    );
    Ok(results)
}

fn projection_is_finite(result: &EarningsResult) -> bool {
    [
        result.gross_interest,
        result.tax_amount,
        result.net_interest,
        result.total_amount,
        result.monthly_earnings,
    ]
    .iter()
    .all(|value| value.is_finite())
}

pub(crate) fn validate_rate(bank: &BankRecord) -> Result<()> {
    let rate = bank.base_interest_rate;
    if !rate.is_finite() || rate < 0.0 {
        return Err(PesoGrowError::InvalidRecord {
            id: bank.id.clone(),
            reason: format!("base interest rate must be a non-negative number, got {rate}"),
        });
    }
    Ok(())
}
