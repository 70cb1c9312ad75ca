//! SQLite users/orders demo.
//!
//! The same queries run either over one shared connection or over a fresh
//! connection per call, so the cost of reconnecting can be measured with
//! [`compare_modes`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod database;
mod error;
mod models;
mod schema; // Diesel generated schema - internal use only

pub use database::{Comparison, ConnectionMode, Database, MIGRATIONS, ModeReport, compare_modes};
pub use error::DbError;
pub use models::{NewOrder, NewUser, Order, User};
