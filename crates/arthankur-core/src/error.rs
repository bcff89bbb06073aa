use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArthankurError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ArthankurError {
    /// Shorthand for the common field/reason validation failure.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ArthankurError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Arithmetic that left the Decimal range.
    pub fn overflow(context: &str) -> Self {
        ArthankurError::FinancialImpossibility(format!("{context} overflowed the decimal range"))
    }
}

impl From<serde_json::Error> for ArthankurError {
    fn from(e: serde_json::Error) -> Self {
        ArthankurError::SerializationError(e.to_string())
    }
}
