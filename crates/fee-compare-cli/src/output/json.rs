use super::Report;

/// Pretty-printed envelope (or variant list) exactly as the core serializes it.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&report.to_value()?)
}

pub fn print_json(report: &Report) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_json(report)?);
    Ok(())
}
