#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use pesogrow_core::banks::{BankCategory, BankRecord};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated directory that outlives the calling test.
pub fn temp_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Writes `json` to a fresh bank file and returns its path.
pub fn write_bank_file(json: &str) -> PathBuf {
    let path = temp_dir().join("banksData.json");
    std::fs::write(&path, json).expect("write bank file");
    path
}

pub fn bank(id: &str, category: BankCategory, rate: f64) -> BankRecord {
    BankRecord::new(id, id.to_uppercase(), category, rate)
}

/// A small mixed list in deliberately unsorted order.
pub fn sample_banks() -> Vec<BankRecord> {
    vec![
        bank("seabank", BankCategory::RuralBank, 4.5),
        bank("maya", BankCategory::LicensedDigitalBank, 3.5),
        bank("pag-ibig-mp2", BankCategory::GovernmentSavings, 7.03),
        bank("cimb", BankCategory::DigitalBankingService, 2.5),
        bank("tonik", BankCategory::LicensedDigitalBank, 4.0),
        bank("ownbank", BankCategory::RuralBank, 6.0),
    ]
}

pub const SAMPLE_BANK_FILE: &str = r#"{
  "lastUpdated": "2026-10-01T00:00:00Z",
  "banks": [
    { "bankId": "seabank", "bankName": "SeaBank", "bankType": "Rural Bank",
      "category": "Rural Bank", "baseInterestRate": 4.5, "minimumDeposit": 0,
      "website": "https://www.seabank.ph", "isActive": true },
    { "bankId": "tonik", "bankName": "Tonik", "bankType": "Digital Bank",
      "category": "Licensed Digital Bank", "baseInterestRate": 4.0, "promoInterestRate": 6.0,
      "minimumDeposit": 0, "website": "https://tonikbank.com", "isActive": true },
    { "bankId": "pag-ibig-mp2", "bankName": "Pag-IBIG MP2", "bankType": "Government",
      "category": "Government Savings", "baseInterestRate": 6.0, "minimumDeposit": 500,
      "website": "https://www.pagibigfund.gov.ph", "isActive": true, "taxExempt": true },
    { "bankId": "closed", "bankName": "Closed Bank", "bankType": "Digital Bank",
      "category": "Licensed Digital Bank", "baseInterestRate": 9.0, "minimumDeposit": 0,
      "website": "https://example.com", "isActive": false }
  ]
}"#;

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
