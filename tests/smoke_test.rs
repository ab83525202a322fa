use chrono::Utc;
use pesogrow_core::{
    banks::{BankCategory, BankRecord, CategoryFilter},
    calculator::{CalculatorConfig, CalculatorInput},
    init,
    provider::StaticProvider,
    services::ComparisonService,
};

#[test]
fn comparison_smoke() {
    init();

    let provider = StaticProvider::new(
        vec![
            BankRecord::new("seabank", "SeaBank", BankCategory::RuralBank, 4.5),
            BankRecord::new("maya", "Maya", BankCategory::LicensedDigitalBank, 3.5),
        ],
        Utc::now(),
    );
    let comparison = ComparisonService::compare(
        &provider,
        &CalculatorInput::default(),
        &CalculatorConfig::default(),
        CategoryFilter::All,
    )
    .expect("comparison");

    assert_eq!(comparison.results.len(), 2);
    assert_eq!(comparison.best().unwrap().bank.id, "maya");
}

#[test]
fn bundled_bank_file_loads() {
    use pesogrow_core::provider::{BankDataProvider, JsonFileProvider};

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/banksData.json");
    let snapshot = JsonFileProvider::new(path).fetch().expect("bundled data");
    assert!(snapshot.banks.iter().all(|bank| bank.is_active));
    assert!(snapshot
        .banks
        .iter()
        .any(|bank| bank.id == "pag-ibig-mp2" && bank.tax_exempt));
}
