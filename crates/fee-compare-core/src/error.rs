use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeeCalcError {
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid amount: '{input}' is not a number")]
    InvalidAmount { input: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },

    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FeeCalcError {
    fn from(e: serde_json::Error) -> Self {
        FeeCalcError::SerializationError(e.to_string())
    }
}
