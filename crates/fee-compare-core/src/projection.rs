use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::error::FeeCalcError;
use crate::types::{
    percent_to_rate, with_metadata, ComputationOutput, Money, Percent, MAX_AMOUNT, MAX_PERCENT,
    MAX_YEARS, MIN_PERCENT, MIN_YEARS,
};
use crate::FeeCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for a single fee scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub initial_capital: Money,
    pub annual_contribution: Money,
    pub years: u32,
    /// Annual fee as a percentage of the post-growth balance (0.75 = 0.75%).
    pub fee_percent: Percent,
    /// Annual growth as a percentage (7 = 7%).
    pub growth_percent: Percent,
}

/// One row of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: u32,
    pub total_investment: Money,
    pub annual_fee: Money,
    pub cumulative_fee: Money,
}

/// Year-by-year ledger for one scenario plus its closing figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub records: Vec<YearlyRecord>,
    pub final_total_investment: Money,
    pub final_cumulative_fee: Money,
}

impl Projection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for a 1-based year, if within the horizon.
    pub fn record(&self, year: u32) -> Option<&YearlyRecord> {
        if year == 0 {
            return None;
        }
        self.records.get((year - 1) as usize)
    }

    /// Balance trajectory indexed by year.
    pub fn balances(&self) -> impl Iterator<Item = (u32, Money)> + '_ {
        self.records.iter().map(|r| (r.year, r.total_investment))
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: &str, reason: &str) -> FeeCalcError {
    FeeCalcError::InvalidInput {
        field: field.into(),
        reason: reason.into(),
    }
}

fn check_amount(field: &str, value: Money) -> FeeCalcResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "must be >= 0"));
    }
    if value > MAX_AMOUNT {
        return Err(invalid(field, "must not exceed 10,000,000,000"));
    }
    Ok(())
}

fn check_percent(field: &str, value: Percent) -> FeeCalcResult<()> {
    if value < MIN_PERCENT || value > MAX_PERCENT {
        return Err(invalid(field, "must be between 0 and 100"));
    }
    Ok(())
}

/// Reject arguments outside the engine's domain instead of guessing at them.
pub fn validate_input(input: &ProjectionInput) -> FeeCalcResult<()> {
    check_amount("initial_capital", input.initial_capital)?;
    check_amount("annual_contribution", input.annual_contribution)?;
    if !(MIN_YEARS..=MAX_YEARS).contains(&input.years) {
        return Err(invalid("years", "must be between 1 and 60"));
    }
    check_percent("fee_percent", input.fee_percent)?;
    check_percent("growth_percent", input.growth_percent)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

fn checked(value: Option<Decimal>, context: &str, year: u32) -> FeeCalcResult<Decimal> {
    value.ok_or_else(|| FeeCalcError::Overflow {
        context: format!("{context} in year {year}"),
    })
}

/// Roll the balance forward one year at a time.
///
/// Growth is credited first, the fee is assessed on the post-growth balance,
/// and the fee is deducted in the same step the contribution is added.
/// Nothing is rounded; formatting belongs to the caller.
pub fn project(input: &ProjectionInput) -> FeeCalcResult<Projection> {
    validate_input(input)?;

    let fee_rate = percent_to_rate(input.fee_percent);
    let growth_rate = percent_to_rate(input.growth_percent);

    let mut balance = input.initial_capital;
    let mut cumulative_fee = Decimal::ZERO;
    let mut records = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        let growth = checked(balance.checked_mul(growth_rate), "growth", year)?;
        balance = checked(balance.checked_add(growth), "balance", year)?;
        let fee = checked(balance.checked_mul(fee_rate), "fee", year)?;
        cumulative_fee = checked(cumulative_fee.checked_add(fee), "cumulative fee", year)?;
        let net = checked(input.annual_contribution.checked_sub(fee), "contribution", year)?;
        balance = checked(balance.checked_add(net), "balance", year)?;

        records.push(YearlyRecord {
            year,
            total_investment: balance,
            annual_fee: fee,
            cumulative_fee,
        });
    }

    debug!(
        years = input.years,
        fee_percent = %input.fee_percent,
        final_total_investment = %balance,
        "projection complete"
    );

    Ok(Projection {
        records,
        final_total_investment: balance,
        final_cumulative_fee: cumulative_fee,
    })
}

/// Run a single projection and wrap it in the standard output envelope.
pub fn build_projection(input: &ProjectionInput) -> FeeCalcResult<ComputationOutput<Projection>> {
    let start = Instant::now();
    let projection = project(input)?;
    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Annual compounding: growth, then fee on post-growth balance, then contribution",
        input,
        Vec::new(),
        elapsed,
        projection,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(
        capital: Decimal,
        contribution: Decimal,
        years: u32,
        fee: Decimal,
        growth: Decimal,
    ) -> ProjectionInput {
        ProjectionInput {
            initial_capital: capital,
            annual_contribution: contribution,
            years,
            fee_percent: fee,
            growth_percent: growth,
        }
    }

    // ---------------------------------------------------------------
    // 1. Single year with growth and fee
    // ---------------------------------------------------------------
    #[test]
    fn test_single_year_growth_then_fee() {
        let p = project(&input(dec!(100_000), dec!(0), 1, dec!(10), dec!(10))).unwrap();
        assert_eq!(p.len(), 1);
        let r = &p.records[0];
        assert_eq!(r.year, 1);
        assert_eq!(r.total_investment, dec!(99_000));
        assert_eq!(r.annual_fee, dec!(11_000));
        assert_eq!(r.cumulative_fee, dec!(11_000));
        assert_eq!(p.final_total_investment, dec!(99_000));
        assert_eq!(p.final_cumulative_fee, dec!(11_000));
    }

    // ---------------------------------------------------------------
    // 2. Contributions only
    // ---------------------------------------------------------------
    #[test]
    fn test_contributions_only() {
        let p = project(&input(dec!(0), dec!(1000), 3, dec!(0), dec!(0))).unwrap();
        let balances: Vec<Decimal> = p.records.iter().map(|r| r.total_investment).collect();
        assert_eq!(balances, vec![dec!(1000), dec!(2000), dec!(3000)]);
        assert!(p.records.iter().all(|r| r.annual_fee.is_zero()));
        assert!(p.records.iter().all(|r| r.cumulative_fee.is_zero()));
    }

    // ---------------------------------------------------------------
    // 3. Contribution is added after the fee is assessed
    // ---------------------------------------------------------------
    #[test]
    fn test_contribution_not_charged_in_same_year() {
        let p = project(&input(dec!(0), dec!(1000), 2, dec!(1), dec!(0))).unwrap();
        // Year 1: nothing to charge, contribution lands after the fee
        assert_eq!(p.records[0].annual_fee, dec!(0));
        assert_eq!(p.records[0].total_investment, dec!(1000));
        // Year 2: 1% of 1000
        assert_eq!(p.records[1].annual_fee, dec!(10));
        assert_eq!(p.records[1].total_investment, dec!(1990));
        assert_eq!(p.records[1].cumulative_fee, dec!(10));
    }

    // ---------------------------------------------------------------
    // 4. Pure compounding without fees
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_fee_compounds_exactly() {
        let p = project(&input(dec!(1000), dec!(0), 3, dec!(0), dec!(10))).unwrap();
        assert_eq!(p.records[0].total_investment, dec!(1100));
        assert_eq!(p.records[1].total_investment, dec!(1210));
        assert_eq!(p.records[2].total_investment, dec!(1331));
    }

    // ---------------------------------------------------------------
    // 5. No rounding between years
    // ---------------------------------------------------------------
    #[test]
    fn test_full_precision_is_retained() {
        let p = project(&input(dec!(100), dec!(0), 2, dec!(0.75), dec!(7))).unwrap();
        // 100 * 1.07 = 107, fee 0.8025, balance 106.1975
        assert_eq!(p.records[0].annual_fee, dec!(0.8025));
        assert_eq!(p.records[0].total_investment, dec!(106.1975));
        // 106.1975 * 1.07 = 113.631325, fee 0.8522349375
        assert_eq!(p.records[1].annual_fee, dec!(0.8522349375));
        assert_eq!(p.records[1].total_investment, dec!(112.7790900625));
    }

    // ---------------------------------------------------------------
    // 6. Ledger shape
    // ---------------------------------------------------------------
    #[test]
    fn test_years_are_contiguous() {
        let p = project(&input(dec!(100_000), dec!(500), 60, dec!(0.75), dec!(7))).unwrap();
        assert_eq!(p.len(), 60);
        for (i, r) in p.records.iter().enumerate() {
            assert_eq!(r.year, i as u32 + 1);
        }
        assert_eq!(p.record(60).map(|r| r.year), Some(60));
        assert!(p.record(0).is_none());
        assert!(p.record(61).is_none());
    }

    // ---------------------------------------------------------------
    // 7. Precondition violations
    // ---------------------------------------------------------------
    #[test]
    fn test_zero_years_rejected() {
        let err = project(&input(dec!(1), dec!(0), 0, dec!(1), dec!(1))).unwrap_err();
        match err {
            FeeCalcError::InvalidInput { field, .. } => assert_eq!(field, "years"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_and_out_of_range_rejected() {
        assert!(project(&input(dec!(-1), dec!(0), 1, dec!(1), dec!(1))).is_err());
        assert!(project(&input(dec!(1), dec!(-5), 1, dec!(1), dec!(1))).is_err());
        assert!(project(&input(dec!(1), dec!(0), 1, dec!(-0.01), dec!(1))).is_err());
        assert!(project(&input(dec!(1), dec!(0), 1, dec!(1), dec!(100.01))).is_err());
        assert!(project(&input(dec!(1), dec!(0), 1, dec!(100), dec!(100))).is_ok());
    }

    #[test]
    fn test_years_beyond_horizon_rejected() {
        for years in [61, 5000, u32::MAX] {
            match project(&input(dec!(1), dec!(0), years, dec!(1), dec!(1))) {
                Err(FeeCalcError::InvalidInput { field, .. }) => assert_eq!(field, "years"),
                other => panic!("years={years}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_amounts_above_ceiling_rejected() {
        let over = MAX_AMOUNT + dec!(0.01);
        match project(&input(over, dec!(0), 1, dec!(1), dec!(1))) {
            Err(FeeCalcError::InvalidInput { field, .. }) => assert_eq!(field, "initial_capital"),
            other => panic!("unexpected {other:?}"),
        }
        match project(&input(dec!(0), over, 1, dec!(1), dec!(1))) {
            Err(FeeCalcError::InvalidInput { field, .. }) => {
                assert_eq!(field, "annual_contribution")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_largest_inputs_at_full_growth_do_not_overflow() {
        // Zero fee doubles every year: C * 2^60 + K * (2^60 - 1)
        let p = project(&input(MAX_AMOUNT, MAX_AMOUNT, 60, dec!(0), dec!(100))).unwrap();
        let two_pow_60 = Decimal::from(1u64 << 60);
        let expected = MAX_AMOUNT * two_pow_60 + MAX_AMOUNT * (two_pow_60 - Decimal::ONE);
        assert_eq!(p.final_total_investment, expected);

        let charged = project(&input(MAX_AMOUNT, MAX_AMOUNT, 60, dec!(1.5), dec!(100))).unwrap();
        assert!(charged.final_total_investment < expected);
        assert!(charged.final_cumulative_fee > Decimal::ZERO);
    }

    // ---------------------------------------------------------------
    // 8. Envelope
    // ---------------------------------------------------------------
    #[test]
    fn test_build_projection_envelope() {
        let i = input(dec!(100_000), dec!(0), 1, dec!(10), dec!(10));
        let out = build_projection(&i).unwrap();
        assert_eq!(out.result.final_total_investment, dec!(99_000));
        assert!(out.warnings.is_empty());
        assert_eq!(out.assumptions["years"], 1);
    }
}
