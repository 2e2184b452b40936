//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    expense::{ExpenseStore, SQLiteExpenseStore},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<E>
where
    E: ExpenseStore + Send + Sync,
{
    /// The store for managing [expenses](crate::Expense).
    pub expense_store: E,
}

impl<E> AppState<E>
where
    E: ExpenseStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(expense_store: E) -> Self {
        Self { expense_store }
    }
}

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteExpenseStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the expense table if it
/// does not exist yet.
///
/// # Errors
/// Returns an error if the database cannot be initialized.
pub fn create_app_state(db_connection: Connection) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(SQLiteExpenseStore::new(connection)))
}
