pub mod chart;
pub mod csv_out;
pub mod currency;
pub mod json;
pub mod minimal;
pub mod table;

use fee_compare_core::comparison::ComparisonOutput;
use fee_compare_core::projection::Projection;
use fee_compare_core::types::ComputationOutput;
use fee_compare_core::variant::VariantSet;
use serde_json::Value;
use std::path::PathBuf;

use crate::OutputFormat;

/// Everything a command hands to the formatters.
pub enum Report {
    Comparison {
        title: String,
        chart: Option<PathBuf>,
        output: ComputationOutput<ComparisonOutput>,
    },
    Projection {
        title: String,
        label: String,
        output: ComputationOutput<Projection>,
    },
    Variants(VariantSet),
}

impl Report {
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        match self {
            Report::Comparison { output, .. } => serde_json::to_value(output),
            Report::Projection { output, .. } => serde_json::to_value(output),
            Report::Variants(set) => serde_json::to_value(set),
        }
    }
}

/// Dispatch output to the appropriate formatter.
pub fn format_output(
    format: &OutputFormat,
    report: &Report,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => json::print_json(report)?,
        OutputFormat::Table => table::print_table(report),
        OutputFormat::Csv => csv_out::print_csv(report)?,
        OutputFormat::Minimal => minimal::print_minimal(report),
    }
    Ok(())
}
