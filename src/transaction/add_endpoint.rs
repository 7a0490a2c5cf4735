//! Defines the endpoint for adding a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::{HxRedirect, HxRequest};
use serde::{Deserialize, Serialize};

use crate::{
    Error, endpoints,
    transaction::{
        Transaction, TransactionStore,
        core::{parse_amount, parse_date},
    },
};

/// The form data for adding a transaction.
///
/// Fields are kept as text so that bad input can be reported with the
/// offending value instead of a generic rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionForm {
    /// The date when the transaction occurred, formatted as `YYYY-MM-DD`.
    pub date: String,
    /// The category the transaction belongs to.
    pub category: String,
    /// The value of the transaction in dollars.
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
}

impl TryFrom<TransactionForm> for Transaction {
    type Error = Error;

    fn try_from(form: TransactionForm) -> Result<Self, Self::Error> {
        Ok(Transaction {
            date: parse_date(&form.date)?,
            category: form.category,
            amount: parse_amount(&form.amount)?,
            description: form.description,
        })
    }
}

/// A route handler for adding a new transaction, redirects to the dashboard on success.
///
/// HTMX requests are redirected with the `HX-Redirect` header, plain form
/// submissions with a 303 redirect. Errors are returned as an alert fragment
/// for HTMX requests and as a full page otherwise.
pub async fn add_transaction_endpoint(
    State(store): State<TransactionStore>,
    HxRequest(is_htmx_request): HxRequest,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = match Transaction::try_from(form) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::error!("Error adding transaction: {error}");
            return error_response(error, is_htmx_request);
        }
    };

    if let Err(error) = store.append_transaction(transaction) {
        tracing::error!("could not add transaction: {error}");
        return error_response(error, is_htmx_request);
    }

    if is_htmx_request {
        (
            HxRedirect(endpoints::ROOT.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response()
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}

fn error_response(error: Error, is_htmx_request: bool) -> Response {
    if is_htmx_request {
        error.into_alert_response()
    } else {
        error.into_page_response()
    }
}
