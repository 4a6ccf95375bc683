//! Table, JSON and CSV rendering for assessment output.
//!
//! Tables are for people: amounts get thousands separators and each
//! assessment is shown as a summary plus a current-versus-proposed
//! comparison. CSV and JSON are for machines and carry raw amounts.

use std::io;

use clap::ValueEnum;
use pit_core::{PitAssessment, RegimeAssessment};
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// How a command writes its result to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Formats a whole-VND amount with comma thousands separators.
pub fn format_vnd(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if rounded < Decimal::ZERO {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Formats a fractional rate as a percentage, e.g. `0.05` as `5%`.
pub fn format_rate(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{percent}%")
}

fn effective_rate(tax: Decimal, gross: Decimal) -> String {
    if gross <= Decimal::ZERO {
        return "-".to_string();
    }
    let percent = (tax * Decimal::ONE_HUNDRED / gross).round_dp(2).normalize();
    format!("{percent}%")
}

/// Row for the per-salary summary table.
#[derive(Debug, Clone, Tabled)]
pub struct SummaryRow {
    #[tabled(rename = "Item")]
    pub item: String,

    #[tabled(rename = "Value")]
    pub value: String,
}

/// Row for the current-versus-proposed comparison table.
#[derive(Debug, Clone, Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "Metric")]
    pub metric: String,

    #[tabled(rename = "Current rules")]
    pub current: String,

    #[tabled(rename = "Proposed rules")]
    pub proposed: String,
}

/// Row for a per-bracket breakdown table.
#[derive(Debug, Clone, Tabled)]
pub struct BracketRow {
    #[tabled(rename = "Rate")]
    pub rate: String,

    #[tabled(rename = "Slice (VND)")]
    pub amount: String,

    #[tabled(rename = "Tax (VND)")]
    pub tax: String,
}

/// One assessment flattened to a single machine-readable record.
///
/// Used verbatim for CSV output and as the row type of the batch table, so
/// the two views can never disagree.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FlatAssessmentRow {
    #[tabled(rename = "Gross")]
    pub gross: Decimal,

    #[tabled(rename = "Deps")]
    pub dependents: u32,

    #[tabled(rename = "Region")]
    pub region: u8,

    #[tabled(rename = "BHXH")]
    pub bhxh: Decimal,

    #[tabled(rename = "BHYT")]
    pub bhyt: Decimal,

    #[tabled(rename = "BHTN")]
    pub bhtn: Decimal,

    #[tabled(rename = "Insurance")]
    pub insurance_total: Decimal,

    #[tabled(rename = "Taxable (cur)")]
    pub current_taxable: Decimal,

    #[tabled(rename = "Tax (cur)")]
    pub current_tax: Decimal,

    #[tabled(rename = "Net (cur)")]
    pub current_net: Decimal,

    #[tabled(rename = "Taxable (prop)")]
    pub proposed_taxable: Decimal,

    #[tabled(rename = "Tax (prop)")]
    pub proposed_tax: Decimal,

    #[tabled(rename = "Net (prop)")]
    pub proposed_net: Decimal,
}

impl From<&PitAssessment> for FlatAssessmentRow {
    fn from(assessment: &PitAssessment) -> Self {
        Self {
            gross: assessment.gross,
            dependents: assessment.dependents,
            region: assessment.region.id(),
            bhxh: assessment.insurance.bhxh,
            bhyt: assessment.insurance.bhyt,
            bhtn: assessment.insurance.bhtn,
            insurance_total: assessment.insurance.total,
            current_taxable: assessment.current.taxable,
            current_tax: assessment.current.tax,
            current_net: assessment.current.net,
            proposed_taxable: assessment.proposed.taxable,
            proposed_tax: assessment.proposed.tax,
            proposed_net: assessment.proposed.net,
        }
    }
}

/// Renders rows as a rounded table with right-aligned data cells.
pub fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Serializes rows to CSV on the given writer, headers included.
pub fn write_csv<W: io::Write, T: Serialize>(
    writer: W,
    rows: &[T],
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn summary_rows(assessment: &PitAssessment) -> Vec<SummaryRow> {
    let vnd = |item: &str, amount: Decimal| SummaryRow {
        item: item.to_string(),
        value: format_vnd(amount),
    };

    vec![
        vnd("Gross salary", assessment.gross),
        SummaryRow {
            item: "Wage region".to_string(),
            value: assessment.region.to_string(),
        },
        SummaryRow {
            item: "Dependents".to_string(),
            value: assessment.dependents.to_string(),
        },
        vnd("BHXH", assessment.insurance.bhxh),
        vnd("BHYT", assessment.insurance.bhyt),
        vnd("BHTN", assessment.insurance.bhtn),
        vnd("Insurance total", assessment.insurance.total),
        vnd("Income after insurance", assessment.income_after_insurance),
    ]
}

pub fn comparison_rows(assessment: &PitAssessment) -> Vec<ComparisonRow> {
    let both = |metric: &str, pick: fn(&RegimeAssessment) -> Decimal| ComparisonRow {
        metric: metric.to_string(),
        current: format_vnd(pick(&assessment.current)),
        proposed: format_vnd(pick(&assessment.proposed)),
    };

    vec![
        ComparisonRow {
            metric: "Deductions applied".to_string(),
            current: format_vnd(assessment.income_after_insurance - assessment.current.taxable),
            proposed: format_vnd(assessment.income_after_insurance - assessment.proposed.taxable),
        },
        both("Taxable income", |view| view.taxable),
        both("Tax", |view| view.tax),
        both("Net take-home", |view| view.net),
        ComparisonRow {
            metric: "Effective rate".to_string(),
            current: effective_rate(assessment.current.tax, assessment.gross),
            proposed: effective_rate(assessment.proposed.tax, assessment.gross),
        },
    ]
}

pub fn breakdown_rows(view: &RegimeAssessment) -> Vec<BracketRow> {
    view.breakdown
        .iter()
        .map(|contribution| BracketRow {
            rate: format_rate(contribution.rate),
            amount: format_vnd(contribution.amount),
            tax: format_vnd(contribution.tax),
        })
        .collect()
}

/// Full human-readable view of one assessment: summary, comparison, and a
/// bracket breakdown per regime that owes tax.
pub fn render_assessment(assessment: &PitAssessment) -> String {
    let mut out = String::new();
    out.push_str(&render_table(&summary_rows(assessment)));
    out.push_str("\n\n");
    out.push_str(&render_table(&comparison_rows(assessment)));
    for view in [&assessment.current, &assessment.proposed] {
        if view.breakdown.is_empty() {
            continue;
        }
        out.push_str(&format!("\n\nBracket breakdown ({} rules)\n", view.regime));
        out.push_str(&render_table(&breakdown_rows(view)));
    }
    out
}
