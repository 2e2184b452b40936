//! Defines the endpoint for deleting an expense.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    expense::{ExpenseId, ExpenseStore},
};

/// A route handler for deleting an expense.
///
/// Responds with 404 if there is no expense with the ID in the path.
pub async fn delete_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
) -> Response
where
    E: ExpenseStore + Send + Sync,
{
    let expense_id = match expense_id {
        Ok(Path(expense_id)) => expense_id,
        Err(rejection) => return Error::InvalidExpenseId(rejection.body_text()).into_response(),
    };

    match state.expense_store.delete(expense_id) {
        Ok(rows_affected) if rows_affected != 0 => {
            Json(json!({ "message": "Expense deleted" })).into_response()
        }
        Ok(_) => Error::DeleteMissingExpense.into_response(),
        Err(error) => {
            tracing::error!("Could not delete expense {expense_id}: {error}");
            error.into_response()
        }
    }
}
