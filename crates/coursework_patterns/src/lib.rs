//! Payment and travel examples for the strategy and factory patterns.
//!
//! - **Strategy**: a closed enum ([`PaymentMethod`], [`TravelMode`]) whose
//!   variants carry the behavior
//! - **Factory**: [`payment_method`] / [`travel_mode`] build a variant from its name
//! - **Shared gateway**: [`PaymentGateway`] is an ordinary value the caller owns
//!   and passes where it is needed, with a strategy that can be swapped at runtime

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod gateway;
mod payment;
mod travel;

pub use error::PatternError;
pub use gateway::PaymentGateway;
pub use payment::{PaymentMethod, payment_method};
pub use travel::{TravelMode, travel_mode};
