//! Named bundles of default inputs and label text.
//!
//! A variant parameterises the presentation layer at startup; the engine
//! never sees it. Two are built in, and more can be supplied from config.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;
use crate::comparison::{ComparisonInput, ScenarioLabels};
use crate::error::FeeCalcError;
use crate::types::{Money, Percent, MAX_AMOUNT, MAX_PERCENT, MAX_YEARS, MIN_PERCENT, MIN_YEARS};
use crate::FeeCalcResult;

pub const DEFAULT_VARIANT: &str = "individual";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDefaults {
    /// Free text, parsed the same way user input is.
    pub capital: String,
    pub contribution: Money,
    pub years: u32,
    pub lower_fee_percent: Percent,
    pub higher_fee_percent: Percent,
    pub growth_percent: Percent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantLabels {
    pub capital: String,
    pub contribution: String,
    pub years: String,
    pub lower_fee: String,
    pub higher_fee: String,
    pub growth: String,
    pub lower_scenario: String,
    pub higher_scenario: String,
}

impl Default for VariantLabels {
    fn default() -> Self {
        Self {
            capital: "Currently Invested Amount".into(),
            contribution: "Annual Contribution".into(),
            years: "Number of Years Invested".into(),
            lower_fee: "Lower Investment Fee (%)".into(),
            higher_fee: "Higher Investment Fee (%)".into(),
            growth: "Rate of Growth for Investments (%)".into(),
            lower_scenario: "Lower Fee".into(),
            higher_scenario: "Higher Fee".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    pub name: String,
    pub title: String,
    pub defaults: VariantDefaults,
    #[serde(default)]
    pub labels: VariantLabels,
}

impl VariantConfig {
    /// Retail investor defaults.
    pub fn individual() -> Self {
        Self {
            name: "individual".into(),
            title: "Investment Fee Calculator".into(),
            defaults: VariantDefaults {
                capital: "100,000".into(),
                contribution: Decimal::ZERO,
                years: 50,
                lower_fee_percent: dec!(0.03),
                higher_fee_percent: dec!(0.75),
                growth_percent: dec!(7),
            },
            labels: VariantLabels::default(),
        }
    }

    /// Large-portfolio defaults.
    pub fn institutional() -> Self {
        Self {
            name: "institutional".into(),
            title: "Portfolio Fee Impact Calculator".into(),
            defaults: VariantDefaults {
                capital: "25,000,000".into(),
                contribution: Decimal::ZERO,
                years: 30,
                lower_fee_percent: dec!(0.05),
                higher_fee_percent: dec!(1.00),
                growth_percent: dec!(7),
            },
            labels: VariantLabels {
                capital: "Portfolio Assets".into(),
                contribution: "Annual Net Inflows".into(),
                years: "Investment Horizon (Years)".into(),
                lower_fee: "Lower Management Fee (%)".into(),
                higher_fee: "Higher Management Fee (%)".into(),
                growth: "Expected Annual Return (%)".into(),
                lower_scenario: "Lower Fee".into(),
                higher_scenario: "Higher Fee".into(),
            },
        }
    }

    pub fn scenario_labels(&self) -> ScenarioLabels {
        ScenarioLabels {
            lower: self.labels.lower_scenario.clone(),
            higher: self.labels.higher_scenario.clone(),
        }
    }

    pub fn default_capital(&self) -> FeeCalcResult<Money> {
        parse_amount(&self.defaults.capital)
    }

    /// Comparison input built purely from this variant's defaults.
    pub fn default_input(&self) -> FeeCalcResult<ComparisonInput> {
        Ok(ComparisonInput {
            initial_capital: self.default_capital()?,
            annual_contribution: self.defaults.contribution,
            years: self.defaults.years,
            lower_fee_percent: self.defaults.lower_fee_percent,
            higher_fee_percent: self.defaults.higher_fee_percent,
            growth_percent: self.defaults.growth_percent,
            labels: self.scenario_labels(),
        })
    }

    /// Check the defaults against the bounds offered to users.
    pub fn validate(&self) -> FeeCalcResult<()> {
        let invalid = |field: &str, reason: &str| FeeCalcError::InvalidInput {
            field: format!("{}.{}", self.name, field),
            reason: reason.into(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        for (field, value) in [
            ("capital", self.default_capital()?),
            ("contribution", self.defaults.contribution),
        ] {
            if value < Decimal::ZERO || value > MAX_AMOUNT {
                return Err(invalid(field, "must be between 0 and 10,000,000,000"));
            }
        }
        if !(MIN_YEARS..=MAX_YEARS).contains(&self.defaults.years) {
            return Err(invalid("years", "must be between 1 and 60"));
        }
        for (field, value) in [
            ("lower_fee_percent", self.defaults.lower_fee_percent),
            ("higher_fee_percent", self.defaults.higher_fee_percent),
            ("growth_percent", self.defaults.growth_percent),
        ] {
            if value < MIN_PERCENT || value > MAX_PERCENT {
                return Err(invalid(field, "must be between 0 and 100"));
            }
        }
        Ok(())
    }
}

/// Ordered collection of variants, looked up by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSet {
    pub variants: Vec<VariantConfig>,
}

impl Default for VariantSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VariantSet {
    pub fn builtin() -> Self {
        Self {
            variants: vec![VariantConfig::individual(), VariantConfig::institutional()],
        }
    }

    pub fn find(&self, name: &str) -> FeeCalcResult<&VariantConfig> {
        self.variants
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FeeCalcError::UnknownVariant(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.variants.iter().map(|v| v.name.as_str()).collect()
    }

    /// Overlay `other` onto this set: same-named entries are replaced in
    /// place, new names are appended. Every incoming variant is validated.
    pub fn merge(&mut self, other: VariantSet) -> FeeCalcResult<()> {
        for variant in other.variants {
            variant.validate()?;
            match self
                .variants
                .iter_mut()
                .find(|v| v.name.eq_ignore_ascii_case(&variant.name))
            {
                Some(existing) => *existing = variant,
                None => self.variants.push(variant),
            }
        }
        Ok(())
    }
}
