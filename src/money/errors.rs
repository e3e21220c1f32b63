// ============================================================================
// Money Errors
// Error types for currency construction, parsing, and arithmetic
// ============================================================================

use thiserror::Error;

/// Errors that can occur while constructing or operating on monetary values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Input string does not match the currency grammar
    #[error("unable to parse {0:?} as currency")]
    Parse(String),

    /// A field or argument is outside its valid range
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Magnitude exceeds the canonical i64 smallest-unit capacity
    #[error("overflow: {0}")]
    Overflow(String),

    /// Multiply/divide produced a fractional smallest unit under the
    /// `Throw` policy
    #[error("{0} resulted in partial cents")]
    PartialCents(&'static str),

    /// Division by zero (scalar divide or percent with zero denominator)
    #[error("division by zero")]
    DivideByZero,
}

/// Result type alias for monetary operations
pub type MoneyResult<T> = Result<T, MoneyError>;
