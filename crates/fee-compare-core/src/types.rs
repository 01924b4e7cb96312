use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as percentages (7 = 7%), as entered by the user.
pub type Percent = Decimal;

/// Rates expressed as decimals (0.07 = 7%).
pub type Rate = Decimal;

/// Inclusive bounds accepted for percentage inputs.
pub const MIN_PERCENT: Decimal = Decimal::ZERO;
pub const MAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Horizon bounds offered to users.
pub const MIN_YEARS: u32 = 1;
pub const MAX_YEARS: u32 = 60;

/// Ceiling for capital and for the annual contribution. At 100% growth over
/// `MAX_YEARS` the balance is bounded by `2^61 * MAX_AMOUNT` (about 2.3e28),
/// which stays inside `Decimal::MAX` (about 7.9e28).
pub const MAX_AMOUNT: Money = dec!(10_000_000_000);

/// Convert a user-facing percentage into a decimal rate.
pub fn percent_to_rate(percent: Percent) -> Rate {
    percent / Decimal::ONE_HUNDRED
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
