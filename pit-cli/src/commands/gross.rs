//! Gross command: solve for the gross salary behind a target net.

use clap::Args;
use pit_core::{GrossUpSolver, PitAssessment, PitCalculator, Regime, Region};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::render::{self, FlatAssessmentRow, OutputFormat};

use super::RegimeArg;

#[derive(Debug, Args)]
pub struct GrossCommand {
    /// Desired monthly net take-home in VND; commas are allowed
    #[arg(value_parser = crate::utils::parse_vnd)]
    target_net: Decimal,

    /// Number of registered dependents
    #[arg(short, long, default_value_t = 0)]
    dependents: u32,

    /// Regional minimum wage zone, 1 to 4
    #[arg(short, long, default_value = "1", value_parser = super::parse_region)]
    region: Region,

    /// Regime whose net figure must reach the target
    #[arg(long, value_enum, default_value = "current")]
    regime: RegimeArg,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

/// JSON payload for a solved gross-up.
#[derive(Debug, Serialize)]
struct GrossUpReport {
    target_net: Decimal,
    regime: Regime,
    gross: Decimal,
    assessment: PitAssessment,
}

impl GrossCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = PitCalculator::default();
        let regime = Regime::from(self.regime);
        let solver = GrossUpSolver::new(&calculator);
        let gross = solver.net_to_gross(self.target_net, self.dependents, self.region, regime)?;
        let assessment = calculator.assess(gross, self.dependents, self.region);

        match self.format {
            OutputFormat::Table => {
                println!(
                    "A gross salary of {} VND nets {} VND under {} rules\n",
                    render::format_vnd(gross),
                    render::format_vnd(assessment.regime(regime).net),
                    regime
                );
                println!("{}", render::render_assessment(&assessment));
            }
            OutputFormat::Json => {
                let report = GrossUpReport {
                    target_net: self.target_net,
                    regime,
                    gross,
                    assessment,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Csv => {
                render::write_csv(std::io::stdout(), &[FlatAssessmentRow::from(&assessment)])?;
            }
        }
        Ok(())
    }
}
