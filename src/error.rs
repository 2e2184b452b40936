//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// At least one of the expense fields was missing, null, empty or zero.
    ///
    /// An amount of zero counts as missing, so a $0.00 expense cannot be
    /// recorded.
    #[error("Missing required fields")]
    MissingFields,

    /// The amount was given but it is not a finite number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The date was given but it is not a calendar date in the format
    /// `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The request body could not be parsed as a JSON expense.
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// The query string could not be parsed, e.g. a repeated parameter.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The expense ID in the request path is not an integer.
    #[error("Invalid expense ID: {0}")]
    InvalidExpenseId(String),

    /// Tried to update an expense that does not exist.
    #[error("Expense not found")]
    UpdateMissingExpense,

    /// Tried to delete an expense that does not exist.
    #[error("Expense not found")]
    DeleteMissingExpense,

    /// An unhandled/unexpected SQL error.
    ///
    /// The message is the one produced by SQLite, it is passed through to
    /// the client as is.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The environment variable for the port was set to something that is
    /// not a port number.
    ///
    /// Callers should pass in the name of the environment variable and the
    /// reason parsing failed.
    #[error("invalid port in the environment variable {0}: {1}")]
    InvalidPort(String, String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl Error {
    /// The HTTP status code that the error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields
            | Error::InvalidAmount(_)
            | Error::InvalidDate(_)
            | Error::InvalidRequestBody(_)
            | Error::InvalidQuery(_)
            | Error::InvalidExpenseId(_) => StatusCode::BAD_REQUEST,
            Error::UpdateMissingExpense | Error::DeleteMissingExpense => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError | Error::InvalidPort(_, _) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status_code(), body).into_response()
    }
}
