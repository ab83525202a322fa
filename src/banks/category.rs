use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::PesoGrowError;

const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Regulatory grouping a savings product falls under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BankCategory {
    #[serde(rename = "Licensed Digital Bank")]
    LicensedDigitalBank,
    #[serde(rename = "Digital Banking Service")]
    DigitalBankingService,
    #[serde(rename = "Rural Bank")]
    RuralBank,
    #[serde(rename = "Government Savings")]
    GovernmentSavings,
}

impl BankCategory {
    pub const ALL: [BankCategory; 4] = [
        BankCategory::LicensedDigitalBank,
        BankCategory::DigitalBankingService,
        BankCategory::RuralBank,
        BankCategory::GovernmentSavings,
    ];

    /// Display name, identical to the value stored in bank files.
    pub fn label(&self) -> &'static str {
        match self {
            BankCategory::LicensedDigitalBank => "Licensed Digital Bank",
            BankCategory::DigitalBankingService => "Digital Banking Service",
            BankCategory::RuralBank => "Rural Bank",
            BankCategory::GovernmentSavings => "Government Savings",
        }
    }

    /// Shorter label used by the category picker.
    pub fn filter_label(&self) -> &'static str {
        match self {
            BankCategory::LicensedDigitalBank => "Licensed Banks",
            BankCategory::DigitalBankingService => "Digital Services",
            BankCategory::RuralBank => "Rural Banks",
            BankCategory::GovernmentSavings => "Government",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            BankCategory::LicensedDigitalBank => "licensed-digital-bank",
            BankCategory::DigitalBankingService => "digital-banking-service",
            BankCategory::RuralBank => "rural-bank",
            BankCategory::GovernmentSavings => "government-savings",
        }
    }

    /// Licensed digital banks are listed ahead of every other category.
    pub fn rank_priority(&self) -> u8 {
        match self {
            BankCategory::LicensedDigitalBank => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for BankCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BankCategory {
    type Err = PesoGrowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        BankCategory::ALL
            .into_iter()
            .find(|category| {
                [category.label(), category.filter_label(), category.slug()]
                    .iter()
                    .any(|name| name.eq_ignore_ascii_case(&needle))
            })
            .ok_or_else(|| unknown_category(value, &needle))
    }
}

fn unknown_category(input: &str, needle: &str) -> PesoGrowError {
    let suggestion = BankCategory::ALL
        .iter()
        .flat_map(|category| [category.slug(), category.filter_label()])
        .chain(std::iter::once("all"))
        .map(|name| (levenshtein(&name.to_ascii_lowercase(), needle), name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, name)| name.to_string());
    PesoGrowError::UnknownCategory {
        input: input.trim().to_string(),
        suggestion,
    }
}

/// Restricts a ranked result list to one category, or keeps everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(BankCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: BankCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => f.write_str(category.filter_label()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = PesoGrowError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_labels_slugs_and_picker_names() {
        assert_eq!(
            "Licensed Digital Bank".parse::<BankCategory>().unwrap(),
            BankCategory::LicensedDigitalBank
        );
        assert_eq!(
            "rural-bank".parse::<BankCategory>().unwrap(),
            BankCategory::RuralBank
        );
        assert_eq!(
            "  digital services ".parse::<BankCategory>().unwrap(),
            BankCategory::DigitalBankingService
        );
        assert_eq!(
            "GOVERNMENT".parse::<BankCategory>().unwrap(),
            BankCategory::GovernmentSavings
        );
    }

    #[test]
    fn unknown_category_carries_close_suggestion() {
        let err = "rurl-bank".parse::<BankCategory>().unwrap_err();
        match err {
            PesoGrowError::UnknownCategory { input, suggestion } => {
                assert_eq!(input, "rurl-bank");
                assert_eq!(suggestion.as_deref(), Some("rural-bank"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn far_off_input_has_no_suggestion() {
        let err = "cryptocurrency exchange"
            .parse::<BankCategory>()
            .unwrap_err();
        assert!(matches!(
            err,
            PesoGrowError::UnknownCategory {
                suggestion: None,
                ..
            }
        ));
    }

    #[test]
    fn only_licensed_banks_get_top_priority() {
        assert_eq!(BankCategory::LicensedDigitalBank.rank_priority(), 0);
        for category in &BankCategory::ALL[1..] {
            assert_eq!(category.rank_priority(), 1, "{category}");
        }
    }

    #[test]
    fn filter_parses_all_and_categories() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        let filter = "rural banks".parse::<CategoryFilter>().unwrap();
        assert!(filter.matches(BankCategory::RuralBank));
        assert!(!filter.matches(BankCategory::LicensedDigitalBank));
    }

    #[test]
    fn serializes_with_display_names() {
        let json = serde_json::to_string(&BankCategory::GovernmentSavings).unwrap();
        assert_eq!(json, "\"Government Savings\"");
    }
}
