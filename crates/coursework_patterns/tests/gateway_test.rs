//! Tests for the payment gateway and factories working together.

use coursework_patterns::{PatternError, PaymentGateway, PaymentMethod, payment_method};

#[test]
fn test_gateway_uses_factory_strategy() {
    let mut gateway = PaymentGateway::new(payment_method("paypal").expect("known method"));
    assert_eq!(
        gateway.pay(100.0).expect("valid amount"),
        "Processing $100.00 through PayPal."
    );
}

#[test]
fn test_gateway_strategy_swap() {
    let mut gateway = PaymentGateway::new(PaymentMethod::PayPal);
    gateway.set_strategy(payment_method("stripe").expect("known method"));
    assert_eq!(gateway.strategy(), PaymentMethod::Stripe);
    assert_eq!(
        gateway.pay(100.0).expect("valid amount"),
        "Processing $100.00 through Stripe."
    );

    gateway.set_strategy(PaymentMethod::CreditCard);
    assert_eq!(
        gateway.pay(250.0).expect("valid amount"),
        "Processing $250.00 through Credit Card."
    );
    assert_eq!(gateway.payments(), 2);
    assert_eq!(gateway.total(), 350.0);
}

#[test]
fn test_shared_gateway_sees_every_payment() {
    fn checkout(gateway: &mut PaymentGateway, amount: f64) -> Result<String, PatternError> {
        gateway.pay(amount)
    }

    let mut gateway = PaymentGateway::new(PaymentMethod::Stripe);
    checkout(&mut gateway, 10.0).expect("first checkout");
    checkout(&mut gateway, 5.0).expect("second checkout");
    assert_eq!(gateway.payments(), 2);
    assert_eq!(gateway.total(), 15.0);
}

#[test]
fn test_failed_payment_not_counted() {
    let mut gateway = PaymentGateway::new(PaymentMethod::PayPal);
    assert_eq!(gateway.pay(-5.0), Err(PatternError::InvalidAmount(-5.0)));
    assert_eq!(gateway.payments(), 0);
    assert_eq!(gateway.total(), 0.0);
}
