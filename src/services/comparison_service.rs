use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    banks::CategoryFilter,
    calculator::{calculate_earnings, CalculatorConfig, CalculatorInput, EarningsResult},
    errors::Result,
    provider::BankDataProvider,
};

/// A ranked, optionally filtered set of projections for one input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub last_updated: DateTime<Utc>,
    pub input: CalculatorInput,
    pub results: Vec<EarningsResult>,
}

impl Comparison {
    pub fn best(&self) -> Option<&EarningsResult> {
        self.results.first()
    }
}

pub struct ComparisonService;

impl ComparisonService {
    /// Fetches the active banks, projects and ranks them, then narrows the
    /// ranked list to the requested category.
    pub fn compare(
        provider: &dyn BankDataProvider,
        input: &CalculatorInput,
        config: &CalculatorConfig,
        filter: CategoryFilter,
    ) -> Result<Comparison> {
        let snapshot = provider.fetch()?;
        let mut results = calculate_earnings(&snapshot.banks, input, config)?;
        results.retain(|result| filter.matches(result.bank.category));

        tracing::debug!(%filter, shown = results.len(), "built comparison");
        Ok(Comparison {
            last_updated: snapshot.last_updated,
            input: *input,
            results,
        })
    }
}
