//! Net command: assess one gross salary under both regimes.

use clap::Args;
use pit_core::{PitCalculator, Region};
use rust_decimal::Decimal;

use crate::render::{self, FlatAssessmentRow, OutputFormat};

#[derive(Debug, Args)]
pub struct NetCommand {
    /// Monthly gross salary in VND; commas are allowed
    #[arg(value_parser = crate::utils::parse_vnd)]
    gross: Decimal,

    /// Number of registered dependents
    #[arg(short, long, default_value_t = 0)]
    dependents: u32,

    /// Regional minimum wage zone, 1 to 4
    #[arg(short, long, default_value = "1", value_parser = super::parse_region)]
    region: Region,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl NetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = PitCalculator::default();
        let assessment = calculator.assess(self.gross, self.dependents, self.region);

        match self.format {
            OutputFormat::Table => println!("{}", render::render_assessment(&assessment)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&assessment)?),
            OutputFormat::Csv => {
                render::write_csv(std::io::stdout(), &[FlatAssessmentRow::from(&assessment)])?;
            }
        }
        Ok(())
    }
}
