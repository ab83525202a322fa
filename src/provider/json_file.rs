use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    banks::BankRecord,
    calculator::validate_rate,
    errors::{PesoGrowError, Result},
};

use super::{BankDataProvider, BankSnapshot};

/// On-disk layout of a bank rates file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDataFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub banks: Vec<BankRecord>,
}

/// Reads bank rates from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
}

impl JsonFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BankDataProvider for JsonFileProvider {
    fn fetch(&self) -> Result<BankSnapshot> {
        let file = load_bank_file(&self.path)?;
        let total = file.banks.len();
        ensure_unique_ids(&file.banks)?;

        let banks: Vec<BankRecord> = file.banks.into_iter().filter(|bank| bank.is_active).collect();
        for bank in &banks {
            validate_rate(bank)?;
        }

        let last_updated = match file.last_updated {
            Some(stamp) => stamp,
            None => {
                tracing::warn!(path = %self.path.display(), "bank file has no lastUpdated; using now");
                Utc::now()
            }
        };

        tracing::debug!(
            path = %self.path.display(),
            active = banks.len(),
            inactive = total - banks.len(),
            "loaded bank rates"
        );
        Ok(BankSnapshot {
            banks,
            last_updated,
        })
    }
}

/// Parses a bank rates file without filtering or validation.
pub fn load_bank_file(path: &Path) -> Result<BankDataFile> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Writes a bank rates file by staging to a temporary sibling first.
pub fn save_bank_file(file: &BankDataFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(file)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

fn ensure_unique_ids(banks: &[BankRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for bank in banks {
        if !seen.insert(bank.id.as_str()) {
            return Err(PesoGrowError::InvalidRecord {
                id: bank.id.clone(),
                reason: "duplicate bank id".into(),
            });
        }
    }
    Ok(())
}
