//! Errors raised by the pattern examples.

/// Error from a factory lookup or a strategy call.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum PatternError {
    /// No payment method is registered under this name.
    #[display("Unknown payment method: {}", _0)]
    UnknownMethod(String),

    /// No travel mode is registered under this name.
    #[display("Unknown travel mode: {}", _0)]
    UnknownMode(String),

    /// Amount is negative or not a finite number.
    #[display("Invalid amount: {}", _0)]
    InvalidAmount(f64),

    /// Distance is negative or not a finite number.
    #[display("Invalid distance: {}", _0)]
    InvalidDistance(f64),
}

impl std::error::Error for PatternError {}
