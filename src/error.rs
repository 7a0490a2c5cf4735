//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{alert::Alert, html::error_view, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The date submitted with a transaction could not be parsed.
    ///
    /// Dates must be formatted as `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The amount submitted with a transaction is not a finite number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The transactions file could not be read or written as CSV.
    #[error("could not read or write the transactions CSV: {0}")]
    CsvError(String),

    /// An I/O error occurred while accessing the transactions file.
    #[error("could not access the transactions file: {0}")]
    IoError(String),

    /// Could not acquire the lock guarding the transactions file.
    #[error("could not acquire the transactions file lock")]
    StoreLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::IoError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError {
                    fix: &error.to_string(),
                    ..Default::default()
                }
                .into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into a full HTML page.
    ///
    /// Invalid form input gives a 400 page naming the bad value, anything else
    /// the 500 page.
    pub fn into_page_response(self) -> Response {
        match self {
            Error::InvalidDate(_) | Error::InvalidAmount(_) => {
                let error_message = self.to_string();
                let page = error_view(
                    "Invalid Transaction",
                    "400",
                    "The transaction was not saved.",
                    &format!("{error_message}. Go back, fix the form and try again."),
                );

                (StatusCode::BAD_REQUEST, Html(page.into_string())).into_response()
            }
            error => error.into_response(),
        }
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let error_message = self.to_string();
        let (status_code, alert) = match self {
            Error::InvalidDate(_) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid transaction date".to_owned(),
                    details: format!("{error_message}. Pick a date with the date picker and try again."),
                },
            ),
            Error::InvalidAmount(_) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid transaction amount".to_owned(),
                    details: format!("{error_message}. Enter a number such as 12.34 and try again."),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert {
                        message: "Something went wrong".to_owned(),
                        details: error_message,
                    },
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
