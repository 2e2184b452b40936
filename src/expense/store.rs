//! Defines the expense store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    expense::{
        Expense, ExpenseId, NewExpense, RowsAffected,
        db::{delete_expense, insert_expense, select_categories, select_expenses, update_expense},
    },
};

/// Creates, retrieves, updates and deletes expenses.
pub trait ExpenseStore {
    /// Get all expenses, newest date first, optionally only those in `category`.
    fn get_all(&self, category: Option<&str>) -> Result<Vec<Expense>, Error>;

    /// Add an expense to the store and return its new ID.
    fn create(&self, expense: &NewExpense) -> Result<ExpenseId, Error>;

    /// Replace the editable fields of the expense `id`.
    ///
    /// Returns the number of expenses changed, zero if `id` does not exist.
    fn update(&self, id: ExpenseId, expense: &NewExpense) -> Result<RowsAffected, Error>;

    /// Remove the expense `id`.
    ///
    /// Returns the number of expenses removed, zero if `id` does not exist.
    fn delete(&self, id: ExpenseId) -> Result<RowsAffected, Error>;

    /// Get the distinct categories in use, sorted alphabetically.
    fn get_categories(&self) -> Result<Vec<String>, Error>;
}

/// Stores expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new expense store with a SQLite database.
    ///
    /// The expense table must already exist, see [crate::initialize_db].
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn get_all(&self, category: Option<&str>) -> Result<Vec<Expense>, Error> {
        select_expenses(category, &*self.lock()?)
    }

    fn create(&self, expense: &NewExpense) -> Result<ExpenseId, Error> {
        insert_expense(expense, &*self.lock()?)
    }

    fn update(&self, id: ExpenseId, expense: &NewExpense) -> Result<RowsAffected, Error> {
        update_expense(id, expense, &*self.lock()?)
    }

    fn delete(&self, id: ExpenseId) -> Result<RowsAffected, Error> {
        delete_expense(id, &*self.lock()?)
    }

    fn get_categories(&self) -> Result<Vec<String>, Error> {
        select_categories(&*self.lock()?)
    }
}

#[cfg(test)]
mod sqlite_expense_store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{ExpenseStore, NewExpense},
    };

    use super::SQLiteExpenseStore;

    fn get_test_store() -> SQLiteExpenseStore {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        SQLiteExpenseStore::new(Arc::new(Mutex::new(connection)))
    }

    fn lunch() -> NewExpense {
        NewExpense {
            amount: 12.5,
            description: "Lunch".to_owned(),
            category: "food".to_owned(),
            date: date!(2024 - 01 - 15),
        }
    }

    #[test]
    fn create_then_get_all_returns_expense() {
        let store = get_test_store();

        let id = store.create(&lunch()).unwrap();

        let expenses = store.get_all(None).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, id);
        assert_eq!(expenses[0].description, "Lunch");
    }

    #[test]
    fn clones_share_the_same_database() {
        let store = get_test_store();
        let clone = store.clone();

        clone.create(&lunch()).unwrap();

        assert_eq!(store.get_all(None).unwrap().len(), 1);
        assert_eq!(store.get_categories().unwrap(), vec!["food"]);
    }

    #[test]
    fn update_and_delete_report_rows_affected() {
        let store = get_test_store();
        let id = store.create(&lunch()).unwrap();

        assert_eq!(store.update(id, &lunch()), Ok(1));
        assert_eq!(store.update(id + 1, &lunch()), Ok(0));
        assert_eq!(store.delete(id + 1), Ok(0));
        assert_eq!(store.delete(id), Ok(1));
    }

    #[test]
    fn poisoned_lock_is_a_lock_error() {
        let store = get_test_store();
        let poisoner = store.clone();

        let _ = std::thread::spawn(move || {
            let _guard = poisoner.connection.lock().unwrap();
            panic!("poison the database lock");
        })
        .join();

        assert_eq!(store.get_all(None), Err(Error::DatabaseLockError));
    }
}
