use clap::Args;
use fee_compare_core::projection::{build_projection, ProjectionInput};
use rust_decimal::Decimal;
use tracing::info;

use super::ScenarioArgs;
use crate::config;
use crate::input;
use crate::output::Report;

/// Arguments for a single-fee projection
#[derive(Args)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Annual fee in percent; defaults to the variant's lower fee
    #[arg(long)]
    pub fee: Option<Decimal>,
}

pub fn run_project(
    args: ProjectArgs,
    config_path: Option<&str>,
) -> Result<Report, Box<dyn std::error::Error>> {
    let variants = config::load_variants(config_path)?;
    let variant = variants.find(&args.scenario.variant)?;

    let projection_input: ProjectionInput = if let Some(ref path) = args.scenario.input {
        input::read_input(path)?
    } else {
        let shared = args.scenario.resolve(variant)?;
        ProjectionInput {
            initial_capital: shared.initial_capital,
            annual_contribution: shared.annual_contribution,
            years: shared.years,
            fee_percent: args.fee.unwrap_or(variant.defaults.lower_fee_percent),
            growth_percent: shared.growth_percent,
        }
    };

    let output = build_projection(&projection_input)?;
    info!(
        years = projection_input.years,
        fee = %projection_input.fee_percent,
        "projection complete"
    );

    Ok(Report::Projection {
        title: variant.title.clone(),
        label: format!("{}% fee", projection_input.fee_percent.normalize()),
        output,
    })
}
