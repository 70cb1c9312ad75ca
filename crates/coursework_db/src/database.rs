//! Users/orders access with a selectable connection strategy.

use std::time::{Duration, Instant};

use derive_getters::Getters;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::{DbError, NewOrder, NewUser, Order, User, schema};

/// Schema for the demo tables, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How queries obtain a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConnectionMode {
    /// One connection opened up front and reused by every query.
    #[display("shared")]
    Shared,
    /// A fresh connection for every query, closed when it returns.
    #[display("per-call")]
    PerCall,
}

/// Handle to the demo database.
///
/// This is an owned value. Callers that need the database borrow it
/// explicitly instead of reaching for a process-wide instance.
///
/// With [`ConnectionMode::PerCall`] an in-memory path (`":memory:"`)
/// yields a new empty database on every query, so use a file path.
pub struct Database {
    path: String,
    mode: ConnectionMode,
    shared: Option<SqliteConnection>,
    connections_opened: usize,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("connected", &self.shared.is_some())
            .field("connections_opened", &self.connections_opened)
            .finish()
    }
}

impl Database {
    /// Opens the database at `path`.
    ///
    /// In shared mode the connection is established immediately.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the shared connection cannot be established.
    #[instrument(skip(path), fields(path = %path.as_ref()))]
    pub fn open(path: impl AsRef<str>, mode: ConnectionMode) -> Result<Self, DbError> {
        let mut db = Self {
            path: path.as_ref().to_string(),
            mode,
            shared: None,
            connections_opened: 0,
        };
        if mode == ConnectionMode::Shared {
            let conn = db.establish()?;
            db.shared = Some(conn);
        }
        info!(%mode, "Database opened");
        Ok(db)
    }

    /// Returns the connection strategy.
    pub fn mode(&self) -> ConnectionMode {
        self.mode
    }

    /// Number of connections established so far.
    pub fn connections_opened(&self) -> usize {
        self.connections_opened
    }

    #[instrument(skip(self), fields(path = %self.path))]
    fn establish(&mut self) -> Result<SqliteConnection, DbError> {
        debug!("Establishing connection");
        let conn = SqliteConnection::establish(&self.path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.path, e)))?;
        self.connections_opened += 1;
        Ok(conn)
    }

    /// Runs `f` with a connection chosen by the mode.
    fn with_connection<T>(
        &mut self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T, DbError>,
    ) -> Result<T, DbError> {
        match self.mode {
            ConnectionMode::PerCall => {
                let mut conn = self.establish()?;
                f(&mut conn)
            }
            ConnectionMode::Shared => {
                let mut conn = match self.shared.take() {
                    Some(conn) => conn,
                    None => self.establish()?,
                };
                let result = f(&mut conn);
                self.shared = Some(conn);
                result
            }
        }
    }

    /// Creates the tables and seeds the demo rows.
    ///
    /// Safe to call repeatedly: existing rows are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a migration or insert fails.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn initialize(&mut self) -> Result<(), DbError> {
        self.with_connection(|conn| {
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;
            debug!(count = applied.len(), "Migrations applied");

            let users = vec![
                NewUser::new(1, "Alice".to_string()),
                NewUser::new(2, "Bob".to_string()),
            ];
            let orders = vec![
                NewOrder::new(1, 1, "Laptop".to_string()),
                NewOrder::new(2, 1, "Mouse".to_string()),
                NewOrder::new(3, 2, "Keyboard".to_string()),
            ];

            let new_users = diesel::insert_or_ignore_into(schema::users::table)
                .values(&users)
                .execute(conn)?;
            let new_orders = diesel::insert_or_ignore_into(schema::orders::table)
                .values(&orders)
                .execute(conn)?;

            info!(new_users, new_orders, "Database seeded");
            Ok(())
        })
    }

    /// Looks up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn find_user(&mut self, user_id: i32) -> Result<Option<User>, DbError> {
        self.with_connection(|conn| {
            let user = schema::users::table
                .find(user_id)
                .select(User::as_select())
                .first(conn)
                .optional()?;
            debug!(found = user.is_some(), "User lookup");
            Ok(user)
        })
    }

    /// Loads the orders of a user, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn orders_for_user(&mut self, user_id: i32) -> Result<Vec<Order>, DbError> {
        self.with_connection(|conn| {
            let orders = schema::orders::table
                .filter(schema::orders::user_id.eq(user_id))
                .order(schema::orders::id.asc())
                .select(Order::as_select())
                .load(conn)?;
            debug!(count = orders.len(), "Orders loaded");
            Ok(orders)
        })
    }
}

/// What one connection mode produced for the comparison lookup.
#[derive(Debug, Clone, Getters)]
pub struct ModeReport {
    mode: ConnectionMode,
    user: Option<User>,
    orders: Vec<Order>,
    connections_opened: usize,
    elapsed: Duration,
}

/// Side-by-side run of the same lookup under both connection modes.
#[derive(Debug, Clone, Getters)]
pub struct Comparison {
    shared: ModeReport,
    per_call: ModeReport,
}

/// Looks up `user_id` and its orders under each mode and times both runs.
///
/// The database at `path` must already be initialized.
///
/// # Errors
///
/// Returns [`DbError`] if either run fails.
#[instrument(skip(path), fields(path = %path.as_ref()))]
pub fn compare_modes(path: impl AsRef<str>, user_id: i32) -> Result<Comparison, DbError> {
    let shared = run_lookup(path.as_ref(), ConnectionMode::Shared, user_id)?;
    let per_call = run_lookup(path.as_ref(), ConnectionMode::PerCall, user_id)?;
    info!(
        shared_connections = shared.connections_opened,
        per_call_connections = per_call.connections_opened,
        shared_us = shared.elapsed.as_micros() as u64,
        per_call_us = per_call.elapsed.as_micros() as u64,
        "Connection modes compared"
    );
    Ok(Comparison { shared, per_call })
}

fn run_lookup(path: &str, mode: ConnectionMode, user_id: i32) -> Result<ModeReport, DbError> {
    let start = Instant::now();
    let mut db = Database::open(path, mode)?;
    let user = db.find_user(user_id)?;
    let orders = db.orders_for_user(user_id)?;
    Ok(ModeReport {
        mode,
        user,
        orders,
        connections_opened: db.connections_opened(),
        elapsed: start.elapsed(),
    })
}
