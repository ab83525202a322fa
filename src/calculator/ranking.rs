use std::cmp::Ordering;

use crate::banks::BankRecord;

use super::earnings::EarningsResult;

/// Sort key for the comparison list: category priority first, then the
/// highest base rate.
#[derive(Debug, Clone, Copy)]
pub struct RankKey {
    pub priority: u8,
    pub rate: f64,
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority).then_with(|| {
            other
                .rate
                .partial_cmp(&self.rate)
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankKey {}

pub fn ranking_key(bank: &BankRecord) -> RankKey {
    RankKey {
        priority: bank.category.rank_priority(),
        rate: bank.base_interest_rate,
    }
}

/// Orders results for display. The sort is stable, so equal keys keep their
/// input order.
pub fn rank(results: &mut [EarningsResult]) {
    results.sort_by_key(|result| ranking_key(&result.bank));
}
