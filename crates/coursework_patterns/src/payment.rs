//! Payment strategies and their factory.

use super::PatternError;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// How a payment is processed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum PaymentMethod {
    /// PayPal account transfer.
    #[strum(serialize = "paypal", to_string = "PayPal")]
    PayPal,
    /// Stripe card processing.
    #[strum(serialize = "stripe", to_string = "Stripe")]
    Stripe,
    /// Direct credit card charge.
    #[strum(serialize = "creditcard", to_string = "Credit Card")]
    CreditCard,
}

impl PaymentMethod {
    /// Processes `amount` and returns the confirmation line.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidAmount`] for negative or non-finite amounts.
    #[instrument]
    pub fn process_payment(self, amount: f64) -> Result<String, PatternError> {
        if !amount.is_finite() || amount < 0.0 {
            warn!("Refusing payment");
            return Err(PatternError::InvalidAmount(amount));
        }
        Ok(format!("Processing ${:.2} through {}.", amount, self))
    }
}

/// Builds the payment method registered under `name` (case-insensitive).
///
/// Known names are `paypal`, `stripe` and `creditcard`.
///
/// # Errors
///
/// Returns [`PatternError::UnknownMethod`] for any other name.
#[instrument]
pub fn payment_method(name: &str) -> Result<PaymentMethod, PatternError> {
    let method = PaymentMethod::from_str(name.trim())
        .map_err(|_| PatternError::UnknownMethod(name.to_string()))?;
    debug!(%method, "Payment method selected");
    Ok(method)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_factory_known_names() {
        assert_eq!(payment_method("paypal"), Ok(PaymentMethod::PayPal));
        assert_eq!(payment_method("stripe"), Ok(PaymentMethod::Stripe));
        assert_eq!(payment_method("creditcard"), Ok(PaymentMethod::CreditCard));
    }

    #[test]
    fn test_factory_ignores_case() {
        assert_eq!(payment_method("PayPal"), Ok(PaymentMethod::PayPal));
        assert_eq!(payment_method(" STRIPE "), Ok(PaymentMethod::Stripe));
    }

    #[test]
    fn test_factory_unknown_name() {
        assert_eq!(
            payment_method("bitcoin"),
            Err(PatternError::UnknownMethod("bitcoin".to_string()))
        );
    }

    #[test]
    fn test_process_payment_messages() {
        assert_eq!(
            PaymentMethod::PayPal.process_payment(100.0).unwrap(),
            "Processing $100.00 through PayPal."
        );
        assert_eq!(
            PaymentMethod::CreditCard.process_payment(250.5).unwrap(),
            "Processing $250.50 through Credit Card."
        );
    }

    #[test]
    fn test_process_payment_rejects_bad_amounts() {
        assert!(PaymentMethod::Stripe.process_payment(-1.0).is_err());
        assert!(PaymentMethod::Stripe.process_payment(f64::NAN).is_err());
        assert!(PaymentMethod::Stripe.process_payment(f64::INFINITY).is_err());
        assert!(PaymentMethod::Stripe.process_payment(0.0).is_ok());
    }

    #[test]
    fn test_every_method_has_a_factory_name() {
        for method in PaymentMethod::iter() {
            let name = match method {
                PaymentMethod::PayPal => "paypal",
                PaymentMethod::Stripe => "stripe",
                PaymentMethod::CreditCard => "creditcard",
            };
            assert_eq!(payment_method(name), Ok(method));
        }
    }
}
