use colored::Colorize;
use fee_compare_core::comparison::ComparisonOutput;
use fee_compare_core::projection::Projection;
use fee_compare_core::types::ComputationOutput;
use fee_compare_core::variant::VariantSet;
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::Table;

use super::currency::{format_currency, format_percent};
use super::Report;

/// Human-readable report: summary sentences followed by yearly ledgers.
pub fn print_table(report: &Report) {
    match report {
        Report::Comparison {
            title,
            chart,
            output,
        } => print_comparison(title, chart.as_deref(), output),
        Report::Projection {
            title,
            label,
            output,
        } => print_projection(title, label, output),
        Report::Variants(set) => print_variants(set),
    }
}

fn print_comparison(
    title: &str,
    chart: Option<&Path>,
    envelope: &ComputationOutput<ComparisonOutput>,
) {
    let out = &envelope.result;
    println!("{}\n", title.bold());

    for side in [&out.lower, &out.higher] {
        println!(
            "After {} years, the total investment with the {} will be {}.",
            out.years,
            side.label,
            format_currency(side.final_balance())
        );
    }
    println!(
        "{} {}{}",
        "Difference in investment due to higher fees:".bold(),
        format_currency(out.balance_difference).bold().underline(),
        ".".bold()
    );

    if let Some(path) = chart {
        println!("\nChart written to {}", path.display());
    }

    for (n, side) in [&out.lower, &out.higher].into_iter().enumerate() {
        println!(
            "\nYearly details for Fee {} ({}, {}):",
            n + 1,
            side.label,
            format_percent(side.fee_percent)
        );
        println!("{}", ledger_table(&side.projection));
    }

    print_envelope_notes(&envelope.warnings, &envelope.methodology);
}

fn print_projection(title: &str, label: &str, envelope: &ComputationOutput<Projection>) {
    let p = &envelope.result;
    println!("{}\n", title.bold());
    println!(
        "After {} years, the total investment with the {} will be {}.",
        p.len(),
        label,
        format_currency(p.final_total_investment)
    );
    println!(
        "Total fees paid over the period: {}.",
        format_currency(p.final_cumulative_fee)
    );
    println!("\nYearly details:");
    println!("{}", ledger_table(p));

    print_envelope_notes(&envelope.warnings, &envelope.methodology);
}

fn print_variants(set: &VariantSet) {
    let mut builder = Builder::default();
    builder.push_record([
        "Name",
        "Title",
        "Capital",
        "Contribution",
        "Years",
        "Lower fee",
        "Higher fee",
        "Growth",
    ]);
    for v in &set.variants {
        let d = &v.defaults;
        builder.push_record([
            v.name.clone(),
            v.title.clone(),
            d.capital.clone(),
            format_currency(d.contribution),
            d.years.to_string(),
            format_percent(d.lower_fee_percent),
            format_percent(d.higher_fee_percent),
            format_percent(d.growth_percent),
        ]);
    }
    let mut table = Table::from(builder);
    table.with(Style::modern());
    println!("{}", table);
}

/// One row per year with currency columns right-aligned.
pub fn ledger_table(projection: &Projection) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Year", "Total Investment", "Annual Fee", "Total Fee Paid"]);
    for r in &projection.records {
        builder.push_record([
            r.year.to_string(),
            format_currency(r.total_investment),
            format_currency(r.annual_fee),
            format_currency(r.cumulative_fee),
        ]);
    }
    let mut table = Table::from(builder);
    table
        .with(Style::modern())
        .modify(Columns::new(1..), Alignment::right());
    table
}

fn print_envelope_notes(warnings: &[String], methodology: &str) {
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in warnings {
            println!("  - {}", w);
        }
    }
    println!("\nMethodology: {}", methodology);
}
