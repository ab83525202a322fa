mod common;

use common::{assert_close, bank, sample_banks};
use pesogrow_core::{
    banks::{BankCategory, BankRecord},
    calculator::{calculate_earnings, CalculatorConfig, CalculatorInput, EarningsResult},
    PesoGrowError,
};

fn calculate(banks: &[BankRecord], principal: f64, months: u32) -> Vec<EarningsResult> {
    calculate_earnings(
        banks,
        &CalculatorInput::new(principal, months),
        &CalculatorConfig::default(),
    )
    .expect("calculate earnings")
}

#[test]
fn one_year_at_four_percent_matches_worked_example() {
    let results = calculate(
        &[bank("tonik", BankCategory::LicensedDigitalBank, 4.0)],
        100_000.0,
        12,
    );
    let result = &results[0];
    assert_close(result.gross_interest, 4_060.40, 0.005);
    assert_close(result.tax_amount, 812.08, 0.005);
    assert_close(result.net_interest, 3_248.32, 0.005);
    assert_close(result.total_amount, 103_248.32, 0.005);
    assert_close(result.monthly_earnings, 270.69, 0.005);
    assert_eq!(result.effective_rate, 4.0);
    assert_eq!(result.principal, 100_000.0);
}

#[test]
fn exempt_product_pays_no_tax() {
    let results = calculate(
        &[bank("pag-ibig-mp2", BankCategory::GovernmentSavings, 6.0)],
        100_000.0,
        12,
    );
    let result = &results[0];
    assert_eq!(result.tax_amount, 0.0);
    assert_eq!(result.net_interest, result.gross_interest);
    assert!(result.tax_exempt);
}

#[test]
fn tax_is_twenty_percent_of_gross_for_taxed_banks() {
    for result in calculate(&sample_banks(), 250_000.0, 36) {
        if result.bank.id == "pag-ibig-mp2" {
            assert_eq!(result.tax_amount, 0.0);
            continue;
        }
        assert_close(result.tax_amount, result.gross_interest * 0.20, 1e-9);
        assert!(result.tax_amount >= 0.0 && result.tax_amount <= result.gross_interest);
    }
}

#[test]
fn totals_conserve_principal_plus_net() {
    for months in [1, 6, 12, 18, 60] {
        for result in calculate(&sample_banks(), 12_345.67, months) {
            assert_eq!(result.total_amount, result.principal + result.net_interest);
            assert_eq!(result.net_interest, result.gross_interest - result.tax_amount);
            assert!(result.total_amount >= result.principal);
            assert_close(
                result.monthly_earnings * f64::from(months),
                result.net_interest,
                1e-6,
            );
        }
    }
}

#[test]
fn higher_rate_earns_strictly_more() {
    let banks = vec![
        bank("low", BankCategory::RuralBank, 3.0),
        bank("high", BankCategory::RuralBank, 3.25),
    ];
    let results = calculate(&banks, 50_000.0, 24);
    let low = results.iter().find(|r| r.bank.id == "low").unwrap();
    let high = results.iter().find(|r| r.bank.id == "high").unwrap();
    assert!(high.gross_interest > low.gross_interest);
    assert!(high.net_interest > low.net_interest);
}

#[test]
fn one_result_per_bank_and_repeatable() {
    let banks = sample_banks();
    let first = calculate(&banks, 100_000.0, 12);
    let second = calculate(&banks, 100_000.0, 12);
    assert_eq!(first.len(), banks.len());
    assert_eq!(first, second);
    assert_eq!(banks, sample_banks(), "input records must not be modified");
}

#[test]
fn fractional_years_compound_partially() {
    let results = calculate(&[bank("ownbank", BankCategory::RuralBank, 6.0)], 100_000.0, 6);
    // two quarters at 1.5%
    assert_close(results[0].gross_interest, 3_022.50, 0.005);
}

#[test]
fn custom_config_changes_tax_and_exemptions() {
    let config = CalculatorConfig::default()
        .with_withholding_tax_rate(0.10)
        .with_tax_exempt_ids(["seabank"]);
    let banks = vec![
        bank("seabank", BankCategory::RuralBank, 4.0),
        bank("pag-ibig-mp2", BankCategory::GovernmentSavings, 4.0),
    ];
    let results =
        calculate_earnings(&banks, &CalculatorInput::new(100_000.0, 12), &config).unwrap();
    let seabank = results.iter().find(|r| r.bank.id == "seabank").unwrap();
    let mp2 = results.iter().find(|r| r.bank.id == "pag-ibig-mp2").unwrap();
    assert_eq!(seabank.tax_amount, 0.0);
    assert_close(mp2.tax_amount, mp2.gross_interest * 0.10, 1e-9);
}

#[test]
fn record_flag_exempts_without_id_match() {
    let banks =
        vec![bank("sss-wisp", BankCategory::GovernmentSavings, 5.0).with_tax_exempt(true)];
    let results = calculate(&banks, 10_000.0, 12);
    assert_eq!(results[0].tax_amount, 0.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let banks = sample_banks();
    let config = CalculatorConfig::default();
    for input in [
        CalculatorInput::new(-1.0, 12),
        CalculatorInput::new(1_000.0, 0),
        CalculatorInput::new(f64::NAN, 12),
    ] {
        let err = calculate_earnings(&banks, &input, &config).unwrap_err();
        assert!(matches!(err, PesoGrowError::InvalidInput(_)), "{err}");
    }
}

#[test]
fn zero_principal_yields_zero_earnings() {
    for result in calculate(&sample_banks(), 0.0, 12) {
        assert_eq!(result.gross_interest, 0.0);
        assert_eq!(result.total_amount, 0.0);
    }
}
