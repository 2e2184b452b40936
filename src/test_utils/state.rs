use rusqlite::Connection;

use crate::{
    AppState, Error, Expense, ExpenseForm, ExpenseId, ExpenseStore, NewExpense, RowsAffected,
    SQLAppState, create_app_state, expense::AmountField,
};

#[track_caller]
pub(crate) fn must_create_test_state() -> SQLAppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    create_app_state(connection).expect("Could not create test app state")
}

#[track_caller]
pub(crate) fn must_insert_expense(
    state: &SQLAppState,
    amount: f64,
    description: &str,
    category: &str,
    date: &str,
) -> ExpenseId {
    let expense = ExpenseForm {
        amount: Some(AmountField::Number(amount)),
        description: Some(description.to_owned()),
        category: Some(category.to_owned()),
        date: Some(date.to_owned()),
    }
    .validate()
    .expect("Invalid test expense");

    state
        .expense_store
        .create(&expense)
        .expect("Could not create test expense")
}

/// An expense store where every operation fails like a missing table would.
#[derive(Debug, Clone)]
pub(crate) struct BrokenExpenseStore;

impl BrokenExpenseStore {
    fn fail<T>(&self) -> Result<T, Error> {
        Err(Error::SqlError(rusqlite::Error::InvalidQuery))
    }
}

impl ExpenseStore for BrokenExpenseStore {
    fn get_all(&self, _category: Option<&str>) -> Result<Vec<Expense>, Error> {
        self.fail()
    }

    fn create(&self, _expense: &NewExpense) -> Result<ExpenseId, Error> {
        self.fail()
    }

    fn update(&self, _id: ExpenseId, _expense: &NewExpense) -> Result<RowsAffected, Error> {
        self.fail()
    }

    fn delete(&self, _id: ExpenseId) -> Result<RowsAffected, Error> {
        self.fail()
    }

    fn get_categories(&self) -> Result<Vec<String>, Error> {
        self.fail()
    }
}

pub(crate) fn broken_test_state() -> AppState<BrokenExpenseStore> {
    AppState::new(BrokenExpenseStore)
}
