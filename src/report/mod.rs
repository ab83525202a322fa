//! Plain-text rendering of comparison results.

pub mod table;

use crate::{
    calculator::EarningsResult,
    currency::{
        format_currency_value, format_currency_whole, format_last_updated, format_percent,
        CurrencyCode, LocaleConfig,
    },
    services::Comparison,
};

use table::{Table, TableColumn};

const CARD_LABEL_WIDTH: usize = 30;

/// Currency and locale used for every amount in a report.
#[derive(Debug, Clone, Default)]
pub struct ReportStyle {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
}

impl ReportStyle {
    pub fn money(&self, amount: f64) -> String {
        format_currency_value(amount, &self.currency, &self.locale)
    }

    pub fn whole(&self, amount: f64) -> String {
        format_currency_whole(amount, &self.currency, &self.locale)
    }
}

/// `"Tax (20%)"`-style label for a withholding rate.
pub fn tax_rate_label(rate: f64) -> String {
    let pct = rate * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}%")
    } else {
        let trimmed = format!("{pct:.2}");
        format!("{}%", trimmed.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// Ranked comparison table. The row whose bank id equals `highlight` is
/// marked with `>`.
pub fn render_table(
    results: &[EarningsResult],
    style: &ReportStyle,
    highlight: Option<&str>,
) -> String {
    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Bank").max_width(28),
        TableColumn::left("Category"),
        TableColumn::right("Rate"),
        TableColumn::right("Gross"),
        TableColumn::right("Tax"),
        TableColumn::right("Net"),
        TableColumn::right("Monthly"),
        TableColumn::right("Total"),
    ]);

    for (idx, result) in results.iter().enumerate() {
        let marker = if highlight == Some(result.bank.id.as_str()) {
            ">"
        } else {
            ""
        };
        let tax = if result.tax_exempt {
            "Tax-free".to_string()
        } else {
            style.money(result.tax_amount)
        };
        table.push_row(vec![
            format!("{marker}{}", idx + 1),
            result.bank.bank_name.clone(),
            result.bank.category.filter_label().to_string(),
            format_percent(result.effective_rate),
            style.money(result.gross_interest),
            tax,
            style.money(result.net_interest),
            style.money(result.monthly_earnings),
            style.money(result.total_amount),
        ]);
    }
    table.render()
}

/// Header line plus table for a whole comparison.
pub fn render_comparison(
    comparison: &Comparison,
    style: &ReportStyle,
    highlight: Option<&str>,
) -> String {
    if comparison.results.is_empty() {
        return format!(
            "As of {}\nNo banks match the selected category.",
            format_last_updated(&comparison.last_updated)
        );
    }
    format!(
        "{} for {} | As of {}\n\n{}",
        style.whole(comparison.input.principal),
        crate::calculator::duration_label(comparison.input.duration_months),
        format_last_updated(&comparison.last_updated),
        render_table(&comparison.results, style, highlight)
    )
}

fn card_line(out: &mut Vec<String>, indent: usize, label: &str, value: &str) {
    let width = CARD_LABEL_WIDTH.saturating_sub(indent);
    out.push(format!("{}{label:<width$} {value}", " ".repeat(indent)));
}

/// Detailed breakdown for one bank: rates, earnings, tax and product details.
pub fn render_card(result: &EarningsResult, style: &ReportStyle, duration_months: u32) -> String {
    let bank = &result.bank;
    let mut out = Vec::new();

    if bank.bank_type.is_empty() {
        out.push(bank.bank_name.clone());
    } else {
        out.push(format!("{} ({})", bank.bank_name, bank.bank_type));
    }

    let mut rate_line = format!("  {} Interest (p.a.)", format_percent(bank.base_interest_rate));
    if let Some(promo) = bank.distinct_promo_rate() {
        rate_line.push_str(&format!("  Up to {}", format_percent(promo)));
    }
    out.push(rate_line);
    match bank.time_deposit_rate {
        Some(rate) if rate > 0.0 => {
            out.push(format!("  {} Time Deposit Rate", format_percent(rate)))
        }
        _ => out.push("  No Time Deposit offer".to_string()),
    }

    card_line(&mut out, 2, "Principal", &style.money(result.principal));
    card_line(
        &mut out,
        2,
        "Monthly Earnings",
        &style.money(result.monthly_earnings),
    );

    let gross_label = format!(
        "Gross Interest ({} p.a.)",
        format_percent(result.effective_rate)
    );
    let net_label = format!("Net Interest ({duration_months} Mo.)");
    if result.tax_exempt {
        out.push("  Tax-Free Benefits".to_string());
        card_line(&mut out, 4, &gross_label, &style.money(result.gross_interest));
        card_line(&mut out, 4, "Tax", &format!("{} (Tax-Free)", style.whole(0.0)));
    } else {
        out.push("  Tax Breakdown".to_string());
        card_line(&mut out, 4, &gross_label, &style.money(result.gross_interest));
        card_line(
            &mut out,
            4,
            &format!("Tax ({})", tax_rate_label(result.tax_rate)),
            &format!("-{}", style.money(result.tax_amount)),
        );
    }
    card_line(&mut out, 4, &net_label, &style.money(result.net_interest));
    card_line(&mut out, 2, "Total Amount", &style.money(result.total_amount));

    let minimum = if bank.minimum_deposit <= 0.0 {
        "No minimum".to_string()
    } else {
        style.money(bank.minimum_deposit)
    };
    out.push(format!("  Min. Deposit: {minimum}"));
    if let Some(promo) = &bank.promo_details {
        out.push(format!("  - Promo: {promo}"));
    }
    for feature in &bank.special_features {
        out.push(format!("  - {feature}"));
    }
    if let Some(description) = &bank.description {
        out.push(format!("  - {description}"));
    }
    if !bank.website.is_empty() {
        out.push(format!("  {}", bank.website));
    }

    out.join("\n")
}
