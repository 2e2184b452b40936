//! Database operations for expenses.

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense, RowsAffected},
};

/// Initialize the expense table and indexes.
///
/// Safe to call on every start up, existing data is left untouched.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount DECIMAL(10, 2) NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            date DATE NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);",
    )?;

    Ok(())
}

/// Create an expense and return its generated ID.
pub fn insert_expense(expense: &NewExpense, connection: &Connection) -> Result<ExpenseId, Error> {
    connection.execute(
        "INSERT INTO expenses (amount, description, category, date) VALUES (?1, ?2, ?3, ?4)",
        params![
            expense.amount,
            expense.description,
            expense.category,
            expense.date
        ],
    )?;

    Ok(connection.last_insert_rowid())
}

/// Retrieve expenses, newest date first.
///
/// Expenses on the same date are ordered by ID, newest first.
/// If `category` is given, only expenses with exactly that category are returned.
pub fn select_expenses(
    category: Option<&str>,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    let mut statement = match category {
        Some(_) => connection.prepare(
            "SELECT id, amount, description, category, date, created_at FROM expenses \
            WHERE category = ?1 \
            ORDER BY date DESC, id DESC",
        )?,
        None => connection.prepare(
            "SELECT id, amount, description, category, date, created_at FROM expenses \
            ORDER BY date DESC, id DESC",
        )?,
    };

    let rows = match category {
        Some(category) => statement.query_map([category], map_row_to_expense)?,
        None => statement.query_map([], map_row_to_expense)?,
    };

    rows.map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Replace the editable fields of the expense `id`.
///
/// Returns the number of rows changed, zero if there is no expense `id`.
pub fn update_expense(
    id: ExpenseId,
    expense: &NewExpense,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute(
            "UPDATE expenses \
            SET amount = ?1, description = ?2, category = ?3, date = ?4 \
            WHERE id = ?5",
            params![
                expense.amount,
                expense.description,
                expense.category,
                expense.date,
                id
            ],
        )
        .map_err(Error::from)
}

/// Delete the expense `id`.
///
/// Returns the number of rows removed, zero if there is no expense `id`.
pub fn delete_expense(id: ExpenseId, connection: &Connection) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expenses WHERE id = :id", &[(":id", &id)])
        .map_err(Error::from)
}

/// Retrieve each category in use exactly once, sorted alphabetically.
pub fn select_categories(connection: &Connection) -> Result<Vec<String>, Error> {
    connection
        .prepare("SELECT DISTINCT category FROM expenses ORDER BY category ASC")?
        .query_map([], |row| row.get(0))?
        .map(|maybe_category| maybe_category.map_err(Error::from))
        .collect()
}

/// Convert a row with the columns `id, amount, description, category, date,
/// created_at` into an [Expense].
pub fn map_row_to_expense(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        created_at: row.get(5)?,
    })
}
