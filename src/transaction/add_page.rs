//! Defines the route handler for the page for adding a new transaction.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    AppState, Error, endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, base,
        dollar_input_styles, loading_spinner,
    },
    navigation::NavBar,
    timezone::get_local_date,
};

fn add_transaction_view(today: Date) -> Markup {
    let add_transaction_route = endpoints::ADD_TRANSACTION_VIEW;
    let nav_bar = NavBar::new(endpoints::ADD_TRANSACTION_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            form
                method="post"
                action=(add_transaction_route)
                hx-post=(add_transaction_route)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Transaction" }

                div
                {
                    label
                        for="date"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Date"
                    }

                    input
                        name="date"
                        id="date"
                        type="date"
                        required
                        value=(today)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="category"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Category"
                    }

                    input
                        name="category"
                        id="category"
                        type="text"
                        placeholder="Groceries"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label
                        for="amount"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Amount"
                    }

                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            placeholder="0.00"
                            required
                            autofocus
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label
                        for="description"
                        class=(FORM_LABEL_STYLE)
                    {
                        "Description"
                    }

                    input
                        name="description"
                        id="description"
                        type="text"
                        placeholder="Description"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Transaction"
                }
            }
        }
    };

    base("Add Transaction", &[dollar_input_styles()], &content)
}

/// The state needed for the add transaction page.
#[derive(Debug, Clone)]
pub struct AddTransactionPageState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for AddTransactionPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Renders the page for adding a transaction.
pub async fn get_add_transaction_page(
    State(state): State<AddTransactionPageState>,
) -> Result<Response, Error> {
    let today = get_local_date(&state.local_timezone)?;

    Ok(add_transaction_view(today).into_response())
}
