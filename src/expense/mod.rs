//! Expense records and the REST endpoints that manage them.

mod create;
mod db;
mod delete;
mod domain;
mod edit;
mod list;
mod store;

pub use create::create_expense_endpoint;
pub use db::{create_expense_table, insert_expense, select_expenses};
pub use delete::delete_expense_endpoint;
pub use domain::{AmountField, Expense, ExpenseForm, ExpenseId, NewExpense, RowsAffected};
pub use edit::edit_expense_endpoint;
pub use list::{ALL_CATEGORIES, get_categories_endpoint, list_expenses_endpoint};
pub use store::{ExpenseStore, SQLiteExpenseStore};
