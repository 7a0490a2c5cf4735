//! Defines the core data model for transactions.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

/// The format used for transaction dates in forms and in the CSV file.
pub const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The field order matches the column order of the transactions CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction happened.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// A short label used to group transactions, e.g. "Groceries".
    pub category: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl Transaction {
    /// Create a new transaction.
    pub fn new(date: Date, category: &str, amount: f64, description: &str) -> Self {
        Self {
            date,
            category: category.to_owned(),
            amount,
            description: description.to_owned(),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns [Error::InvalidDate] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, Error> {
    Date::parse(text.trim(), DATE_FORMAT).map_err(|_| Error::InvalidDate(text.to_owned()))
}

/// Parse a transaction amount in dollars.
///
/// # Errors
/// Returns [Error::InvalidAmount] if `text` is not a finite number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| Error::InvalidAmount(text.to_owned()))
}
