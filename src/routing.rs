//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{
        ExpenseStore, create_expense_endpoint, delete_expense_endpoint, edit_expense_endpoint,
        get_categories_endpoint, list_expenses_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The expense API is mounted under [endpoints::EXPENSES_API] and every other
/// path is served from the files in `static_dir`, with `index.html` served
/// for directories.
pub fn build_router<E>(state: AppState<E>, static_dir: impl AsRef<Path>) -> Router
where
    E: ExpenseStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(list_expenses_endpoint::<E>).post(create_expense_endpoint::<E>),
        )
        .route(
            endpoints::EXPENSE_CATEGORIES,
            get(get_categories_endpoint::<E>),
        )
        .route(
            endpoints::EXPENSE,
            put(edit_expense_endpoint::<E>).delete(delete_expense_endpoint::<E>),
        )
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}
