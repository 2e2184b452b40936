//! Endpoints for listing expenses and the categories in use.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, expense::ExpenseStore};

/// The category filter value that selects expenses from every category.
pub const ALL_CATEGORIES: &str = "all";

/// The query parameters for listing expenses.
#[derive(Debug, Default, Deserialize)]
pub struct ListExpensesQuery {
    /// Only list expenses in this category, unless it is [ALL_CATEGORIES].
    pub category: Option<String>,
}

impl ListExpensesQuery {
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
    }
}

/// A route handler for listing expenses as JSON, newest first.
///
/// Responds with 400 if the query string cannot be parsed.
pub async fn list_expenses_endpoint<E>(
    State(state): State<AppState<E>>,
    query: Result<Query<ListExpensesQuery>, QueryRejection>,
) -> Response
where
    E: ExpenseStore + Send + Sync,
{
    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return Error::InvalidQuery(rejection.body_text()).into_response(),
    };

    match state.expense_store.get_all(query.category_filter()) {
        Ok(expenses) => Json(expenses).into_response(),
        Err(error) => {
            tracing::error!("Could not list expenses with {query:?}: {error}");
            error.into_response()
        }
    }
}

/// A route handler for listing the distinct expense categories as JSON.
pub async fn get_categories_endpoint<E>(State(state): State<AppState<E>>) -> Response
where
    E: ExpenseStore + Send + Sync,
{
    match state.expense_store.get_categories() {
        Ok(categories) => Json(categories).into_response(),
        Err(error) => {
            tracing::error!("Could not get expense categories: {error}");
            error.into_response()
        }
    }
}
