//! Defines the endpoint for updating an expense.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    expense::{ExpenseForm, ExpenseId, ExpenseStore},
};

/// A route handler for replacing the amount, description, category and date
/// of an expense.
///
/// Responds with 404 if there is no expense with the ID in the path.
pub async fn edit_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    expense_id: Result<Path<ExpenseId>, PathRejection>,
    payload: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response
where
    E: ExpenseStore + Send + Sync,
{
    let expense_id = match expense_id {
        Ok(Path(expense_id)) => expense_id,
        Err(rejection) => return Error::InvalidExpenseId(rejection.body_text()).into_response(),
    };

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return Error::InvalidRequestBody(rejection.body_text()).into_response(),
    };

    let expense = match form.validate() {
        Ok(expense) => expense,
        Err(error) => return error.into_response(),
    };

    match state.expense_store.update(expense_id, &expense) {
        Ok(rows_affected) if rows_affected != 0 => Json(json!({
            "message": "Expense updated",
            "id": expense_id,
        }))
        .into_response(),
        Ok(_) => Error::UpdateMissingExpense.into_response(),
        Err(error) => {
            tracing::error!("Could not update expense {expense_id}: {error}");
            error.into_response()
        }
    }
}
