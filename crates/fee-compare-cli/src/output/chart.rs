use fee_compare_core::comparison::ComparisonOutput;
use fee_compare_core::types::Money;
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use std::path::Path;
use tracing::debug;

use super::currency::format_currency_f64;

const LOWER_COLOR: RGBColor = RGBColor(30, 144, 255);
const HIGHER_COLOR: RGBColor = RGBColor(200, 0, 100);

/// Money leaves exact decimal arithmetic only here, for plotting.
fn to_f64(value: Money) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Render both balance trajectories as an SVG line chart indexed by year.
pub fn write_balance_chart(
    path: &Path,
    title: &str,
    out: &ComparisonOutput,
) -> Result<(), Box<dyn std::error::Error>> {
    let series = out.balance_series();
    let lower: Vec<(u32, f64)> = series.iter().map(|p| (p.year, to_f64(p.lower))).collect();
    let higher: Vec<(u32, f64)> = series.iter().map(|p| (p.year, to_f64(p.higher))).collect();

    let y_max = lower
        .iter()
        .chain(&higher)
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);
    let y_top = if y_max > 0.0 { y_max * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, (1280, 720)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 110)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0u32..out.years, 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Total Investment")
        .y_label_formatter(&|v| format_currency_f64(*v))
        .draw()?;

    chart
        .draw_series(LineSeries::new(lower, &LOWER_COLOR))?
        .label(format!("{} ({}%)", out.lower.label, out.lower.fee_percent.normalize()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], &LOWER_COLOR));

    chart
        .draw_series(LineSeries::new(higher, &HIGHER_COLOR))?
        .label(format!("{} ({}%)", out.higher.label, out.higher.fee_percent.normalize()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], &HIGHER_COLOR));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.7))
        .border_style(&BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    debug!(path = %path.display(), points = series.len(), "balance chart written");
    Ok(())
}
