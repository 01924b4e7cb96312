use clap::Args;
use fee_compare_core::comparison::{self, ComparisonInput};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

use super::ScenarioArgs;
use crate::config;
use crate::input;
use crate::output::{chart, Report};

/// Arguments for a two-fee comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Lower annual fee in percent (0.03 = 0.03%)
    #[arg(long)]
    pub lower_fee: Option<Decimal>,

    /// Higher annual fee in percent (0.75 = 0.75%)
    #[arg(long)]
    pub higher_fee: Option<Decimal>,

    /// Write an SVG line chart of both balance trajectories
    #[arg(long)]
    pub chart: Option<PathBuf>,
}

pub fn run_compare(
    args: CompareArgs,
    config_path: Option<&str>,
) -> Result<Report, Box<dyn std::error::Error>> {
    let variants = config::load_variants(config_path)?;
    let variant = variants.find(&args.scenario.variant)?;

    let comparison_input: ComparisonInput = if let Some(ref path) = args.scenario.input {
        input::read_input(path)?
    } else {
        let shared = args.scenario.resolve(variant)?;
        ComparisonInput {
            initial_capital: shared.initial_capital,
            annual_contribution: shared.annual_contribution,
            years: shared.years,
            lower_fee_percent: args
                .lower_fee
                .unwrap_or(variant.defaults.lower_fee_percent),
            higher_fee_percent: args
                .higher_fee
                .unwrap_or(variant.defaults.higher_fee_percent),
            growth_percent: shared.growth_percent,
            labels: variant.scenario_labels(),
        }
    };

    let output = comparison::compare(&comparison_input)?;
    info!(
        variant = %variant.name,
        years = output.result.years,
        difference = %output.result.balance_difference,
        "comparison complete"
    );

    if let Some(ref path) = args.chart {
        chart::write_balance_chart(path, &variant.title, &output.result)?;
        info!(path = %path.display(), "chart written");
    }

    Ok(Report::Comparison {
        title: variant.title.clone(),
        chart: args.chart,
        output,
    })
}
