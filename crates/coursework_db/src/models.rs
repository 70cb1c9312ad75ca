//! Database models.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::schema;

/// A customer row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    id: i32,
    name: String,
}

/// Insertable user row with an explicit id, used for seeding.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::users)]
pub struct NewUser {
    id: i32,
    name: String,
}

/// An order placed by a user.
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Associations, Selectable, Getters,
)]
#[diesel(table_name = schema::orders)]
#[diesel(belongs_to(User))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Order {
    id: i32,
    user_id: i32,
    product: String,
}

/// Insertable order row with an explicit id, used for seeding.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::orders)]
pub struct NewOrder {
    id: i32,
    user_id: i32,
    product: String,
}
