//! The insights page: overall spending statistics and the biggest categories.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{CATEGORY_BADGE_STYLE, PAGE_CONTAINER_STYLE, base, format_currency},
    navigation::NavBar,
    summary::{TOP_CATEGORY_COUNT, average_monthly_spending, top_categories, total_spending},
    transaction::TransactionStore,
};

const STAT_CARD_STYLE: &str = "p-6 bg-white rounded-lg shadow dark:bg-gray-800";
const STAT_LABEL_STYLE: &str = "text-sm font-medium text-gray-500 dark:text-gray-400";
const STAT_VALUE_STYLE: &str = "text-2xl font-bold";

struct Insights {
    total_spending: f64,
    average_monthly_spending: Option<f64>,
    top_categories: Vec<(String, f64)>,
}

/// Display total spending, average monthly spending and the top categories.
pub async fn get_insights_page(State(store): State<TransactionStore>) -> Response {
    let transactions = store.load_transactions();

    let insights = Insights {
        total_spending: total_spending(&transactions),
        average_monthly_spending: average_monthly_spending(&transactions),
        top_categories: top_categories(&transactions, TOP_CATEGORY_COUNT),
    };

    insights_view(&insights).into_response()
}

fn stat_card(id: &str, label: &str, value: &str) -> Markup {
    html!(
        div id=(id) class=(STAT_CARD_STYLE)
        {
            p class=(STAT_LABEL_STYLE) { (label) }
            p class=(STAT_VALUE_STYLE) { (value) }
        }
    )
}

fn insights_view(insights: &Insights) -> Markup {
    let nav_bar = NavBar::new(endpoints::INSIGHTS_VIEW).into_html();
    let average = insights
        .average_monthly_spending
        .map(format_currency)
        .unwrap_or_else(|| "N/A".to_owned());

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold mb-4" { "Insights" }

            div class="grid grid-cols-1 md:grid-cols-2 gap-4 w-full max-w-screen-md"
            {
                (stat_card("total-spending", "Total Spending", &format_currency(insights.total_spending)))
                (stat_card("average-monthly-spending", "Average Monthly Spending", &average))
            }

            section id="top-categories" class="w-full max-w-screen-md mt-8"
            {
                h3 class="text-lg font-semibold mb-2" { "Top Categories" }

                @if insights.top_categories.is_empty() {
                    p { "No transactions recorded yet." }
                } @else {
                    ol class="space-y-2"
                    {
                        @for (category, total) in &insights.top_categories {
                            li class="flex justify-between items-center"
                            {
                                span class=(CATEGORY_BADGE_STYLE) { (category) }
                                span { (format_currency(*total)) }
                            }
                        }
                    }
                }
            }
        }
    );

    base("Insights", &[], &content)
}
