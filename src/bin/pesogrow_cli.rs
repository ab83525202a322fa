use std::{env, path::PathBuf, process};

use colored::Colorize;
use pesogrow_core::{
    banks::CategoryFilter,
    calculator::{input, parse_amount_arg, CalculatorInput},
    config::{Config, ConfigManager},
    currency::format_last_updated,
    init,
    provider::{BankDataProvider, JsonFileProvider},
    report::{render_card, render_comparison, ReportStyle},
    services::ComparisonService,
    utils::build_info,
    PesoGrowError,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".bright_red());
        process::exit(1);
    }
}

#[derive(Debug, Default)]
struct CompareArgs {
    amount: Option<f64>,
    months: Option<u32>,
    category: CategoryFilter,
    banks: Option<PathBuf>,
    highlight: Option<String>,
    cards: bool,
    json: bool,
}

fn run() -> Result<(), PesoGrowError> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "compare" => compare(parse_compare_args(&rest)?),
        "banks" => {
            let banks = parse_banks_args(&rest)?;
            let config = load_config()?;
            let provider =
                JsonFileProvider::new(banks.unwrap_or_else(|| config.resolve_banks_file()));
            let snapshot = provider.fetch()?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        "presets" => {
            let style = ReportStyle::default();
            println!("{}", "Investment periods".bold());
            for months in input::DURATION_PRESETS {
                println!("  {months:>2}  {}", input::duration_label(months));
            }
            println!("{}", "Quick amounts".bold());
            for amount in input::QUICK_AMOUNTS {
                println!("  {}", style.whole(amount));
            }
            Ok(())
        }
        "version" => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }
}

fn compare(args: CompareArgs) -> Result<(), PesoGrowError> {
    let config = load_config()?;
    let defaults = config.default_input();
    let input = CalculatorInput::new(
        args.amount.unwrap_or(defaults.principal),
        args.months.unwrap_or(defaults.duration_months),
    );
    let provider =
        JsonFileProvider::new(args.banks.unwrap_or_else(|| config.resolve_banks_file()));
    let comparison =
        ComparisonService::compare(&provider, &input, &config.calculator, args.category)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    let style = ReportStyle {
        currency: config.currency_code(),
        locale: config.locale_config(),
    };
    if args.cards {
        println!(
            "{}",
            format!("As of {}", format_last_updated(&comparison.last_updated)).bold()
        );
        for result in &comparison.results {
            let card = render_card(result, &style, input.duration_months);
            if args.highlight.as_deref() == Some(result.bank.id.as_str()) {
                println!("\n{}", card.bright_cyan());
            } else {
                println!("\n{card}");
            }
        }
    } else {
        println!(
            "{}",
            render_comparison(&comparison, &style, args.highlight.as_deref())
        );
    }
    Ok(())
}

fn load_config() -> Result<Config, PesoGrowError> {
    ConfigManager::new()?.load()
}

fn parse_compare_args(args: &[String]) -> Result<CompareArgs, PesoGrowError> {
    let mut parsed = CompareArgs::default();
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--cards" => parsed.cards = true,
            "--json" => parsed.json = true,
            "--amount" | "--months" | "--category" | "--banks" | "--highlight" => {
                let value = iter.next().ok_or_else(|| {
                    PesoGrowError::InvalidInput(format!("{flag} expects a value"))
                })?;
                match flag.as_str() {
                    "--amount" => parsed.amount = Some(parse_amount_arg(value)?),
                    "--months" => {
                        parsed.months = Some(value.trim().parse().map_err(|_| {
                            PesoGrowError::InvalidInput(format!(
                                "--months expects a whole number of months, got `{value}`"
                            ))
                        })?)
                    }
                    "--category" => parsed.category = value.parse()?,
                    "--banks" => parsed.banks = Some(PathBuf::from(value)),
                    _ => parsed.highlight = Some(value.clone()),
                }
            }
            other => {
                return Err(PesoGrowError::InvalidInput(format!(
                    "unknown option `{other}`"
                )))
            }
        }
    }
    Ok(parsed)
}

fn parse_banks_args(args: &[String]) -> Result<Option<PathBuf>, PesoGrowError> {
    let mut banks = None;
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--banks" => {
                let value = iter.next().ok_or_else(|| {
                    PesoGrowError::InvalidInput("--banks expects a value".into())
                })?;
                banks = Some(PathBuf::from(value));
            }
            other => {
                return Err(PesoGrowError::InvalidInput(format!(
                    "unknown option `{other}` for banks"
                )))
            }
        }
    }
    Ok(banks)
}

fn print_usage() {
    eprintln!(
        "Usage: pesogrow_cli <command>\n\
         Commands:\n  \
         compare [--amount A] [--months M] [--category C] [--banks FILE] [--highlight ID] [--cards] [--json]\n  \
         banks [--banks FILE]\n  \
         presets\n  \
         version"
    );
}
