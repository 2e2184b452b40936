//! Defines the endpoint for creating a new expense.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState, Error,
    expense::{ExpenseForm, ExpenseStore},
};

/// A route handler for creating a new expense, responds with the new ID.
///
/// Responds with 400 if the body is not a complete expense, in which case
/// nothing is stored.
pub async fn create_expense_endpoint<E>(
    State(state): State<AppState<E>>,
    payload: Result<Json<ExpenseForm>, JsonRejection>,
) -> Response
where
    E: ExpenseStore + Send + Sync,
{
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => return Error::InvalidRequestBody(rejection.body_text()).into_response(),
    };

    let expense = match form.validate() {
        Ok(expense) => expense,
        Err(error) => return error.into_response(),
    };

    match state.expense_store.create(&expense) {
        Ok(id) => Json(json!({ "id": id })).into_response(),
        Err(error) => {
            tracing::error!("Could not create expense with {expense:?}: {error}");
            error.into_response()
        }
    }
}
