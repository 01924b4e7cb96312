use fee_compare_core::comparison::ComparisonOutput;
use fee_compare_core::types::{Money, Percent};
use fee_compare_core::variant::VariantSet;
use serde::Serialize;
use std::io;

use super::Report;

#[derive(Debug, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub year: u32,
    pub lower_total_investment: Money,
    pub lower_annual_fee: Money,
    pub lower_cumulative_fee: Money,
    pub higher_total_investment: Money,
    pub higher_annual_fee: Money,
    pub higher_cumulative_fee: Money,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct VariantRow<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub capital: &'a str,
    pub contribution: Money,
    pub years: u32,
    pub lower_fee_percent: Percent,
    pub higher_fee_percent: Percent,
    pub growth_percent: Percent,
}

/// Write output as CSV to stdout.
pub fn print_csv(report: &Report) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match report {
        Report::Comparison { output, .. } => {
            for row in comparison_rows(&output.result) {
                wtr.serialize(row)?;
            }
        }
        Report::Projection { output, .. } => {
            for record in &output.result.records {
                wtr.serialize(record)?;
            }
        }
        Report::Variants(set) => {
            for row in variant_rows(set) {
                wtr.serialize(row)?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Both ledgers side by side, one row per year.
pub fn comparison_rows(out: &ComparisonOutput) -> Vec<ComparisonRow> {
    out.lower
        .projection
        .records
        .iter()
        .zip(&out.higher.projection.records)
        .map(|(lo, hi)| ComparisonRow {
            year: lo.year,
            lower_total_investment: lo.total_investment,
            lower_annual_fee: lo.annual_fee,
            lower_cumulative_fee: lo.cumulative_fee,
            higher_total_investment: hi.total_investment,
            higher_annual_fee: hi.annual_fee,
            higher_cumulative_fee: hi.cumulative_fee,
        })
        .collect()
}

pub fn variant_rows(set: &VariantSet) -> Vec<VariantRow<'_>> {
    set.variants
        .iter()
        .map(|v| VariantRow {
            name: &v.name,
            title: &v.title,
            capital: &v.defaults.capital,
            contribution: v.defaults.contribution,
            years: v.defaults.years,
            lower_fee_percent: v.defaults.lower_fee_percent,
            higher_fee_percent: v.defaults.higher_fee_percent,
            growth_percent: v.defaults.growth_percent,
        })
        .collect()
}
