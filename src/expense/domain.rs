//! Core expense domain types and request validation.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// Database identifier for an expense.
pub type ExpenseId = i64;

/// The number of rows changed by an update or delete.
pub type RowsAffected = usize;

/// The largest amount, in either direction, that can be stored to the cent.
pub const MAX_AMOUNT: f64 = 1e13;

/// The format expense dates are read from and written in, e.g. "2024-01-15".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID assigned by the store, never reused.
    pub id: ExpenseId,
    /// The amount in dollars, with at most two fraction digits.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// Free text category, e.g. "food".
    pub category: String,
    /// The day the money was spent.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// When the expense was first recorded, e.g. "2024-01-15 12:34:56" (UTC).
    pub created_at: String,
}

/// The editable fields of an expense, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The amount in dollars, rounded to cents.
    pub amount: f64,
    /// What the money was spent on.
    pub description: String,
    /// Free text category.
    pub category: String,
    /// The day the money was spent.
    pub date: Date,
}

/// The JSON body for creating or updating an expense.
///
/// Every field is optional here so that a missing field can be reported as
/// a client error instead of a body parsing failure.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The amount as a JSON number or a numeric string.
    pub amount: Option<AmountField>,
    /// What the money was spent on.
    pub description: Option<String>,
    /// Free text category.
    pub category: Option<String>,
    /// The date as `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// An amount as sent by a client.
///
/// The inline edit form sends the raw input value, so amounts arrive as
/// strings as well as numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    /// A JSON number, e.g. `12.5`.
    Number(f64),
    /// A numeric string, e.g. `"12.50"`.
    Text(String),
}

impl ExpenseForm {
    /// Check the form and convert it into a [NewExpense].
    ///
    /// # Errors
    ///
    /// Returns [Error::MissingFields] if any field is missing, an empty
    /// string, or if the amount is zero. Returns [Error::InvalidAmount] or
    /// [Error::InvalidDate] if a field is present but malformed.
    pub fn validate(self) -> Result<NewExpense, Error> {
        let (Some(amount), Some(description), Some(category), Some(date)) = (
            self.amount,
            non_empty(self.description),
            non_empty(self.category),
            non_empty(self.date),
        ) else {
            return Err(Error::MissingFields);
        };

        let amount = parse_amount(amount)?;
        let date = parse_date(&date)?;

        Ok(NewExpense {
            amount,
            description,
            category,
            date,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.is_empty())
}

fn parse_amount(amount: AmountField) -> Result<f64, Error> {
    let amount = match amount {
        AmountField::Number(number) => number,
        AmountField::Text(text) => {
            let text = text.trim();

            if text.is_empty() {
                return Err(Error::MissingFields);
            }

            text.parse::<f64>()
                .map_err(|error| Error::InvalidAmount(format!("{text:?} is not a number ({error})")))?
        }
    };

    if !amount.is_finite() {
        return Err(Error::InvalidAmount(format!("{amount} is not a finite number")));
    }

    if amount.abs() > MAX_AMOUNT {
        return Err(Error::InvalidAmount(format!(
            "{amount} is outside the range -{MAX_AMOUNT} to {MAX_AMOUNT}"
        )));
    }

    let amount = round_to_cents(amount);

    // Zero is treated the same as a missing amount.
    if amount == 0.0 {
        return Err(Error::MissingFields);
    }

    Ok(amount)
}

fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn parse_date(date: &str) -> Result<Date, Error> {
    Date::parse(date, DATE_FORMAT)
        .map_err(|error| Error::InvalidDate(format!("{date:?} is not a YYYY-MM-DD date ({error})")))
}
