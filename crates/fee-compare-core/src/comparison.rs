use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::warn;

use crate::error::FeeCalcError;
use crate::projection::{project, Projection, ProjectionInput};
use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FeeCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Display names for the two scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioLabels {
    pub lower: String,
    pub higher: String,
}

impl Default for ScenarioLabels {
    fn default() -> Self {
        Self {
            lower: "Lower Fee".to_string(),
            higher: "Higher Fee".to_string(),
        }
    }
}

/// Shared inputs plus the two fee percentages being compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonInput {
    pub initial_capital: Money,
    pub annual_contribution: Money,
    pub years: u32,
    pub lower_fee_percent: Percent,
    pub higher_fee_percent: Percent,
    pub growth_percent: Percent,
    #[serde(default)]
    pub labels: ScenarioLabels,
}

impl ComparisonInput {
    /// Engine input for one side of the comparison.
    pub fn scenario(&self, fee_percent: Percent) -> ProjectionInput {
        ProjectionInput {
            initial_capital: self.initial_capital,
            annual_contribution: self.annual_contribution,
            years: self.years,
            fee_percent,
            growth_percent: self.growth_percent,
        }
    }
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub label: String,
    pub fee_percent: Percent,
    pub projection: Projection,
}

impl ScenarioResult {
    pub fn final_balance(&self) -> Money {
        self.projection.final_total_investment
    }
}

/// Both ledgers and the closing balance gap between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub years: u32,
    pub lower: ScenarioResult,
    pub higher: ScenarioResult,
    /// final_balance(lower) - final_balance(higher)
    pub balance_difference: Money,
}

/// A single chart point: both balances for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalancePoint {
    pub year: u32,
    pub lower: Money,
    pub higher: Money,
}

impl ComparisonOutput {
    /// Both balance trajectories joined by year.
    pub fn balance_series(&self) -> Vec<BalancePoint> {
        self.lower
            .projection
            .records
            .iter()
            .zip(&self.higher.projection.records)
            .map(|(lo, hi)| BalancePoint {
                year: lo.year,
                lower: lo.total_investment,
                higher: hi.total_investment,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Project both fee scenarios over the same horizon and report the
/// difference in closing balances.
pub fn compare(input: &ComparisonInput) -> FeeCalcResult<ComputationOutput<ComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.lower_fee_percent > input.higher_fee_percent {
        warn!(
            lower = %input.lower_fee_percent,
            higher = %input.higher_fee_percent,
            "fee order is inverted"
        );
        warnings.push(format!(
            "{} ({}%) is higher than {} ({}%); the difference will be negative",
            input.labels.lower,
            input.lower_fee_percent,
            input.labels.higher,
            input.higher_fee_percent
        ));
    }

    let lower = project(&input.scenario(input.lower_fee_percent))?;
    let higher = project(&input.scenario(input.higher_fee_percent))?;

    let balance_difference = closing_gap(&lower, &higher)?;

    let output = ComparisonOutput {
        years: input.years,
        lower: ScenarioResult {
            label: input.labels.lower.clone(),
            fee_percent: input.lower_fee_percent,
            projection: lower,
        },
        higher: ScenarioResult {
            label: input.labels.higher.clone(),
            fee_percent: input.higher_fee_percent,
            projection: higher,
        },
        balance_difference,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fee comparison (two annual-compounding projections, difference of closing balances)",
        &serde_json::json!({
            "initial_capital": input.initial_capital.to_string(),
            "annual_contribution": input.annual_contribution.to_string(),
            "years": input.years,
            "lower_fee_percent": input.lower_fee_percent.to_string(),
            "higher_fee_percent": input.higher_fee_percent.to_string(),
            "growth_percent": input.growth_percent.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Difference in closing balances without building the full envelope.
pub fn balance_difference(input: &ComparisonInput) -> FeeCalcResult<Money> {
    let lower = project(&input.scenario(input.lower_fee_percent))?;
    let higher = project(&input.scenario(input.higher_fee_percent))?;
    closing_gap(&lower, &higher)
}

fn closing_gap(lower: &Projection, higher: &Projection) -> FeeCalcResult<Money> {
    lower
        .final_total_investment
        .checked_sub(higher.final_total_investment)
        .ok_or_else(|| FeeCalcError::Overflow {
            context: "balance difference".into(),
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_AMOUNT;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn default_input() -> ComparisonInput {
        ComparisonInput {
            initial_capital: dec!(100_000),
            annual_contribution: Decimal::ZERO,
            years: 50,
            lower_fee_percent: dec!(0.03),
            higher_fee_percent: dec!(0.75),
            growth_percent: dec!(7),
            labels: ScenarioLabels::default(),
        }
    }

    #[test]
    fn test_difference_is_lower_minus_higher() {
        let out = compare(&default_input()).unwrap().result;
        assert_eq!(
            out.balance_difference,
            out.lower.final_balance() - out.higher.final_balance()
        );
        assert!(out.balance_difference > Decimal::ZERO);
        assert_eq!(out.years, 50);
        assert_eq!(out.lower.projection.len(), 50);
        assert_eq!(out.higher.projection.len(), 50);
    }

    #[test]
    fn test_equal_fees_have_no_difference() {
        let mut input = default_input();
        input.higher_fee_percent = input.lower_fee_percent;
        let out = compare(&input).unwrap();
        assert_eq!(out.result.balance_difference, Decimal::ZERO);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_inverted_fees_warn_and_go_negative() {
        let mut input = default_input();
        input.lower_fee_percent = dec!(1);
        input.higher_fee_percent = dec!(0.5);
        let out = compare(&input).unwrap();
        assert!(out.result.balance_difference < Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("Lower Fee"));
    }

    #[test]
    fn test_labels_are_carried_through() {
        let mut input = default_input();
        input.labels = ScenarioLabels {
            lower: "Index fund".into(),
            higher: "Managed fund".into(),
        };
        let out = compare(&input).unwrap().result;
        assert_eq!(out.lower.label, "Index fund");
        assert_eq!(out.higher.label, "Managed fund");
        assert_eq!(out.lower.fee_percent, dec!(0.03));
        assert_eq!(out.higher.fee_percent, dec!(0.75));
    }

    #[test]
    fn test_balance_series_joins_by_year() {
        let mut input = default_input();
        input.years = 3;
        let out = compare(&input).unwrap().result;
        let series = out.balance_series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].year, 1);
        assert_eq!(series[2].year, 3);
        for point in &series {
            assert!(point.lower >= point.higher);
        }
        assert_eq!(series[2].lower, out.lower.final_balance());
    }

    #[test]
    fn test_invalid_scenario_propagates() {
        let mut input = default_input();
        input.higher_fee_percent = dec!(101);
        assert!(matches!(
            compare(&input),
            Err(FeeCalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_balance_difference_shortcut_matches() {
        let input = default_input();
        let full = compare(&input).unwrap().result.balance_difference;
        assert_eq!(balance_difference(&input).unwrap(), full);
    }

    #[test]
    fn test_balance_difference_at_input_ceiling() {
        let input = ComparisonInput {
            initial_capital: MAX_AMOUNT,
            annual_contribution: MAX_AMOUNT,
            years: 60,
            lower_fee_percent: dec!(0),
            higher_fee_percent: dec!(100),
            growth_percent: dec!(100),
            labels: ScenarioLabels::default(),
        };
        let gap = balance_difference(&input).unwrap();
        assert_eq!(gap, compare(&input).unwrap().result.balance_difference);
        // The fully charged side keeps only the last contribution
        let higher = project(&input.scenario(dec!(100))).unwrap();
        assert_eq!(higher.final_total_investment, MAX_AMOUNT);
        assert!(gap > Decimal::ZERO);
    }

    #[test]
    fn test_years_beyond_horizon_rejected_for_both_paths() {
        let mut input = default_input();
        input.years = 5000;
        assert!(matches!(compare(&input), Err(FeeCalcError::InvalidInput { .. })));
        assert!(matches!(
            balance_difference(&input),
            Err(FeeCalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_labels_default_when_missing_from_json() {
        let json = r#"{
            "initial_capital": "1000",
            "annual_contribution": "0",
            "years": 2,
            "lower_fee_percent": "0.1",
            "higher_fee_percent": "1",
            "growth_percent": "5"
        }"#;
        let input: ComparisonInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.labels, ScenarioLabels::default());
    }
}
