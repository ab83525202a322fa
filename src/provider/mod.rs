//! Sources of bank rate data for the calculator.

pub mod json_file;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{banks::BankRecord, errors::Result};

pub use json_file::{load_bank_file, save_bank_file, BankDataFile, JsonFileProvider};

/// Active bank records plus the moment the rates were last checked.
///
/// Serializes to the same shape the rates endpoint serves:
/// `{ "banks": [...], "lastUpdated": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankSnapshot {
    pub banks: Vec<BankRecord>,
    pub last_updated: DateTime<Utc>,
}

/// Read side of a bank-rate store. Implementations only return active records.
pub trait BankDataProvider: Send + Sync {
    fn fetch(&self) -> Result<BankSnapshot>;
}

/// Serves a fixed snapshot, e.g. rates embedded by a host application.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    snapshot: BankSnapshot,
}

impl StaticProvider {
    pub fn new(banks: Vec<BankRecord>, last_updated: DateTime<Utc>) -> Self {
        Self {
            snapshot: BankSnapshot {
                banks,
                last_updated,
            },
        }
    }
}

impl BankDataProvider for StaticProvider {
    fn fetch(&self) -> Result<BankSnapshot> {
        let mut snapshot = self.snapshot.clone();
        snapshot.banks.retain(|bank| bank.is_active);
        Ok(snapshot)
    }
}
