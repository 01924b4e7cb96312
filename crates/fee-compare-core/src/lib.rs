pub mod amount;
pub mod comparison;
pub mod error;
pub mod projection;
pub mod types;
pub mod variant;

pub use error::FeeCalcError;
pub use types::*;

/// Standard result type for all fee-compare operations
pub type FeeCalcResult<T> = Result<T, FeeCalcError>;
