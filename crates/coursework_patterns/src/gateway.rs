//! A payment gateway whose strategy can be swapped at runtime.

use super::{PatternError, PaymentMethod};
use tracing::{info, instrument};

/// Routes payments through the currently selected [`PaymentMethod`].
///
/// There is no hidden global instance. Build one gateway near the top
/// of the program and hand it to whatever needs to take payments.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentGateway {
    strategy: PaymentMethod,
    payments: usize,
    total: f64,
}

impl PaymentGateway {
    /// Creates a gateway using `strategy`.
    #[instrument]
    pub fn new(strategy: PaymentMethod) -> Self {
        Self {
            strategy,
            payments: 0,
            total: 0.0,
        }
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> PaymentMethod {
        self.strategy
    }

    /// Replaces the active strategy.
    #[instrument(skip(self), fields(from = %self.strategy))]
    pub fn set_strategy(&mut self, strategy: PaymentMethod) {
        self.strategy = strategy;
    }

    /// Pays `amount` with the active strategy.
    ///
    /// # Errors
    ///
    /// Propagates [`PatternError::InvalidAmount`]; failed payments are not counted.
    #[instrument(skip(self), fields(strategy = %self.strategy))]
    pub fn pay(&mut self, amount: f64) -> Result<String, PatternError> {
        let message = self.strategy.process_payment(amount)?;
        self.payments += 1;
        self.total += amount;
        info!(payments = self.payments, "Payment processed");
        Ok(message)
    }

    /// Number of successful payments.
    pub fn payments(&self) -> usize {
        self.payments
    }

    /// Sum of successful payment amounts.
    pub fn total(&self) -> f64 {
        self.total
    }
}
