//! Table views for dashboard data display.

use maud::{Markup, html};
use time::Date;

use crate::{
    html::{
        CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
    summary::format_month,
    transaction::Transaction,
};

const TABLE_STYLE: &str = "w-full text-sm text-left text-gray-500 dark:text-gray-400";
const TABLE_AMOUNT_CELL_STYLE: &str = "px-6 py-4 text-right whitespace-nowrap";
const TABLE_WRAPPER_STYLE: &str = "overflow-x-auto rounded-lg shadow";

/// Renders the most recent transactions, newest first.
pub(super) fn recent_transactions_table(transactions: &[&Transaction]) -> Markup {
    html! {
        div id="recent-transactions" class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Recent Transactions" }

            div class=(TABLE_WRAPPER_STYLE)
            {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_AMOUNT_CELL_STYLE) { "Amount" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (transaction.date) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                                }
                                td class=(TABLE_CELL_STYLE) { (transaction.description) }
                                td class=(TABLE_AMOUNT_CELL_STYLE)
                                {
                                    (format_currency(transaction.amount))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the total per category, largest first.
pub(super) fn category_totals_table(category_totals: &[(String, f64)]) -> Markup {
    html! {
        div id="category-spending" class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Spending by Category" }

            div class=(TABLE_WRAPPER_STYLE)
            {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_AMOUNT_CELL_STYLE) { "Total" }
                        }
                    }

                    tbody
                    {
                        @for (category, total) in category_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class=(TABLE_CELL_STYLE) { (category) }
                                td class=(TABLE_AMOUNT_CELL_STYLE) { (format_currency(*total)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the total per month in chronological order.
pub(super) fn monthly_totals_table(monthly_totals: &[(Date, f64)]) -> Markup {
    html! {
        div id="monthly-spending" class="w-full"
        {
            h3 class="text-xl font-semibold mb-4" { "Spending by Month" }

            div class=(TABLE_WRAPPER_STYLE)
            {
                table class=(TABLE_STYLE)
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Month" }
                            th scope="col" class=(TABLE_AMOUNT_CELL_STYLE) { "Total" }
                        }
                    }

                    tbody
                    {
                        @for (month, total) in monthly_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                th scope="row" class=(TABLE_CELL_STYLE) { (format_month(*month)) }
                                td class=(TABLE_AMOUNT_CELL_STYLE) { (format_currency(*total)) }
                            }
                        }
                    }
                }
            }
        }
    }
}
