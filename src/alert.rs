//! Alert messages shown to users after a failed form submission.
//!
//! Alerts are rendered as HTML fragments that HTMX swaps into the
//! `#alert-container` element of the base page.

use maud::{Markup, html};

const ALERT_ERROR_STYLE: &str = "p-4 mb-4 text-sm border rounded-lg \
    text-red-800 border-red-300 bg-red-50 \
    dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

/// An error message with some extra details.
#[derive(Debug, Clone)]
pub struct Alert {
    /// The headline of the alert.
    pub message: String,
    /// A longer explanation, e.g. how to fix the problem.
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class=(ALERT_ERROR_STYLE)
                onclick="this.remove()"
            {
                p class="font-semibold" { (self.message) }

                @if !self.details.is_empty() {
                    p { (self.details) }
                }
            }
        )
    }
}
