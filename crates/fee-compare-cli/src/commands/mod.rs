pub mod compare;
pub mod project;
pub mod variants;

use clap::Args;
use fee_compare_core::amount::parse_amount;
use fee_compare_core::types::{Money, Percent};
use fee_compare_core::variant::{VariantConfig, DEFAULT_VARIANT};
use rust_decimal::Decimal;

/// Inputs shared by every scenario: how much, for how long, growing how fast.
#[derive(Args)]
pub struct ScenarioArgs {
    /// Calculator variant supplying defaults and labels
    #[arg(long, default_value = DEFAULT_VARIANT)]
    pub variant: String,

    /// Path to JSON input file, or `-` for stdin (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Currently invested amount; separators and symbols are allowed ("$25,000,000")
    #[arg(long, allow_hyphen_values = true)]
    pub capital: Option<String>,

    /// Amount added at the end of every year
    #[arg(long)]
    pub contribution: Option<Decimal>,

    /// Number of years invested
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub years: Option<u32>,

    /// Annual growth rate in percent (7 = 7%)
    #[arg(long)]
    pub growth: Option<Decimal>,
}

/// Shared inputs after falling back to the variant defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub initial_capital: Money,
    pub annual_contribution: Money,
    pub years: u32,
    pub growth_percent: Percent,
}

impl ScenarioArgs {
    pub fn resolve(
        &self,
        variant: &VariantConfig,
    ) -> Result<ResolvedScenario, Box<dyn std::error::Error>> {
        let capital_text = self
            .capital
            .as_deref()
            .unwrap_or(&variant.defaults.capital);
        let initial_capital = parse_amount(capital_text)
            .map_err(|_| format!("Please enter a valid number for {}.", variant.labels.capital))?;

        Ok(ResolvedScenario {
            initial_capital,
            annual_contribution: self.contribution.unwrap_or(variant.defaults.contribution),
            years: self.years.unwrap_or(variant.defaults.years),
            growth_percent: self.growth.unwrap_or(variant.defaults.growth_percent),
        })
    }
}

#[cfg(test)]
pub(crate) fn scenario_args(capital: Option<&str>) -> ScenarioArgs {
    ScenarioArgs {
        variant: DEFAULT_VARIANT.to_string(),
        input: None,
        capital: capital.map(str::to_string),
        contribution: None,
        years: None,
        growth: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_fill_missing_flags() {
        let resolved = scenario_args(None)
            .resolve(&VariantConfig::institutional())
            .unwrap();
        assert_eq!(resolved.initial_capital, dec!(25_000_000));
        assert_eq!(resolved.years, 30);
        assert_eq!(resolved.growth_percent, dec!(7));
        assert_eq!(resolved.annual_contribution, Decimal::ZERO);
    }

    #[test]
    fn test_formatted_capital_is_accepted() {
        let resolved = scenario_args(Some("$1,234.50"))
            .resolve(&VariantConfig::individual())
            .unwrap();
        assert_eq!(resolved.initial_capital, dec!(1234.50));
    }

    #[test]
    fn test_bad_capital_names_the_field() {
        let err = scenario_args(Some("lots"))
            .resolve(&VariantConfig::institutional())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter a valid number for Portfolio Assets."
        );
    }
}
