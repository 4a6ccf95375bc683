//! Brackets command: print the statutory tables the engine runs on.

use clap::Args;
use pit_core::{PitCalculator, Regime, Region, TaxPolicy};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use crate::render::{self, OutputFormat, format_rate, format_vnd};

#[derive(Debug, Args)]
pub struct BracketsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Debug, Tabled)]
struct WageRow {
    #[tabled(rename = "Region")]
    region: String,

    #[tabled(rename = "Minimum wage (VND)")]
    wage: String,

    #[tabled(rename = "BHTN cap (VND)")]
    bhtn_cap: String,
}

#[derive(Debug, Tabled)]
struct FundRow {
    #[tabled(rename = "Fund")]
    fund: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Salary cap")]
    cap: String,
}

#[derive(Debug, Tabled)]
struct ScheduleRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Upper bound (VND)")]
    upper_bound: String,

    #[tabled(rename = "Rate")]
    rate: String,
}

/// CSV record covering one bracket of one regime.
#[derive(Debug, Serialize)]
struct BracketCsvRow {
    regime: Regime,
    bracket: usize,
    upper_bound: Option<Decimal>,
    rate: Decimal,
}

impl BracketsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = PitCalculator::default();
        let policy = calculator.policy();

        match self.format {
            OutputFormat::Table => print_tables(policy),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(policy)?),
            OutputFormat::Csv => render::write_csv(std::io::stdout(), &bracket_csv_rows(policy))?,
        }
        Ok(())
    }
}

fn bracket_csv_rows(policy: &TaxPolicy) -> Vec<BracketCsvRow> {
    let mut rows = Vec::new();
    for &regime in Regime::all() {
        for (index, bracket) in policy.rules(regime).brackets.iter().enumerate() {
            rows.push(BracketCsvRow {
                regime,
                bracket: index + 1,
                upper_bound: bracket.upper_bound,
                rate: bracket.rate,
            });
        }
    }
    rows
}

fn print_tables(policy: &TaxPolicy) {
    println!("Statutory tables effective from {}\n", policy.effective_from);

    let wage_rows: Vec<WageRow> = Region::all()
        .iter()
        .map(|&region| {
            let wage = policy.minimum_wages.for_region(region);
            WageRow {
                region: region.to_string(),
                wage: format_vnd(wage),
                bhtn_cap: format_vnd(policy.insurance.bhtn_cap_multiplier * wage),
            }
        })
        .collect();
    println!("Regional minimum wages");
    println!("{}\n", render::render_table(&wage_rows));

    let fund_rows = vec![
        FundRow {
            fund: "BHXH".to_string(),
            rate: format_rate(policy.insurance.bhxh_rate),
            cap: format_vnd(policy.insurance.bhxh_bhyt_cap),
        },
        FundRow {
            fund: "BHYT".to_string(),
            rate: format_rate(policy.insurance.bhyt_rate),
            cap: format_vnd(policy.insurance.bhxh_bhyt_cap),
        },
        FundRow {
            fund: "BHTN".to_string(),
            rate: format_rate(policy.insurance.bhtn_rate),
            cap: format!(
                "{} x regional minimum wage",
                policy.insurance.bhtn_cap_multiplier.normalize()
            ),
        },
    ];
    println!("Employee insurance contributions");
    println!("{}", render::render_table(&fund_rows));

    for &regime in Regime::all() {
        let rules = policy.rules(regime);
        println!("\nProgressive schedule ({regime} rules)");
        println!(
            "Deductions: {} personal, {} per dependent",
            format_vnd(rules.personal_deduction),
            format_vnd(rules.dependent_deduction)
        );

        let schedule_rows: Vec<ScheduleRow> = rules
            .brackets
            .iter()
            .enumerate()
            .map(|(index, bracket)| ScheduleRow {
                index: index + 1,
                upper_bound: bracket
                    .upper_bound
                    .map_or_else(|| "no limit".to_string(), format_vnd),
                rate: format_rate(bracket.rate),
            })
            .collect();
        println!("{}", render::render_table(&schedule_rows));
    }
}
