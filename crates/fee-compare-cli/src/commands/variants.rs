use crate::config;
use crate::output::Report;

pub fn run_variants(config_path: Option<&str>) -> Result<Report, Box<dyn std::error::Error>> {
    Ok(Report::Variants(config::load_variants(config_path)?))
}
