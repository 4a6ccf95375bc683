//! Batch command: assess every salary row of a CSV file.

use std::path::PathBuf;

use clap::Args;
use pit_core::{PitAssessment, PitCalculator};

use crate::csv_loader;
use crate::render::{self, FlatAssessmentRow, OutputFormat};

#[derive(Debug, Args)]
pub struct BatchCommand {
    /// CSV file of salaries to assess, or `-` for stdin
    #[arg(short, long)]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let inputs = csv_loader::load(&self.file)?;
        let calculator = PitCalculator::default();

        let assessments: Vec<PitAssessment> = inputs
            .iter()
            .map(|input| calculator.assess(input.gross, input.dependents, input.region))
            .collect();
        let rows: Vec<FlatAssessmentRow> =
            assessments.iter().map(FlatAssessmentRow::from).collect();

        match self.format {
            OutputFormat::Table if rows.is_empty() => println!("No rows to assess"),
            OutputFormat::Table => println!("{}", render::render_table(&rows)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessments)?),
            OutputFormat::Csv => render::write_csv(std::io::stdout(), &rows)?,
        }
        Ok(())
    }
}
