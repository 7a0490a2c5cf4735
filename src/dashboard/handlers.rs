//! Dashboard HTTP handlers and view rendering.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    dashboard::{
        charts::{
            DashboardChart, category_spending_chart, charts_script, charts_view,
            monthly_spending_chart,
        },
        tables::{category_totals_table, monthly_totals_table, recent_transactions_table},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    summary::{RECENT_TRANSACTION_COUNT, recent_transactions, totals_by_category, totals_by_month},
    transaction::{Transaction, TransactionStore},
};

/// Holds all the data needed to render the dashboard.
struct DashboardData<'a> {
    recent_transactions: Vec<&'a Transaction>,
    category_totals: Vec<(String, f64)>,
    monthly_totals: Vec<(Date, f64)>,
}

/// Display a page with recent transactions and spending totals.
pub async fn get_dashboard_page(State(store): State<TransactionStore>) -> Response {
    let transactions = store.load_transactions();
    let nav_bar = NavBar::new(endpoints::ROOT);

    if transactions.is_empty() {
        return dashboard_no_data_view(nav_bar).into_response();
    }

    let data = DashboardData {
        recent_transactions: recent_transactions(&transactions, RECENT_TRANSACTION_COUNT),
        category_totals: totals_by_category(&transactions),
        monthly_totals: totals_by_month(&transactions),
    };

    tracing::debug!(
        "Rendering dashboard for {} transactions across {} categories and {} months",
        transactions.len(),
        data.category_totals.len(),
        data.monthly_totals.len()
    );

    dashboard_view(nav_bar, &data).into_response()
}

/// Creates the dashboard charts from the aggregated totals.
fn build_dashboard_charts(data: &DashboardData) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-spending-chart",
            options: monthly_spending_chart(&data.monthly_totals).to_string(),
        },
        DashboardChart {
            id: "category-spending-chart",
            options: category_spending_chart(&data.category_totals).to_string(),
        },
    ]
}

/// Renders the dashboard page when no transaction data exists.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let add_transaction_link = link(endpoints::ADD_TRANSACTION_VIEW, "adding a transaction");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Your spending summary will show up here once you record some
                transactions. Get started by " (add_transaction_link) "."
            }
        }
    );

    base("Dashboard", &[], &content)
}

fn dashboard_view(nav_bar: NavBar, data: &DashboardData) -> Markup {
    let nav_bar = nav_bar.into_html();
    let charts = build_dashboard_charts(data);

    let content = html!(
        (nav_bar)

        div
            id="dashboard-content"
            class="flex flex-col items-center gap-8 px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            (charts_view(&charts))

            (recent_transactions_table(&data.recent_transactions))

            div class="grid grid-cols-1 xl:grid-cols-2 gap-4 w-full"
            {
                (category_totals_table(&data.category_totals))
                (monthly_totals_table(&data.monthly_totals))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
    ];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        test_utils::{TempFile, assert_status_ok, assert_valid_html, parse_html_document},
        transaction::{Transaction, TransactionStore},
    };

    use super::get_dashboard_page;

    fn store_with(file: &TempFile, transactions: &[Transaction]) -> TransactionStore {
        let store = TransactionStore::new(file.path());
        store.save_transactions(transactions).unwrap();
        store
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let file = TempFile::new("dashboard_page_loads_successfully");
        let store = store_with(
            &file,
            &[
                Transaction::new(date!(2024 - 01 - 15), "Food", 100.0, "Groceries"),
                Transaction::new(date!(2024 - 02 - 01), "Rent", 1200.0, "February rent"),
            ],
        );

        let response = get_dashboard_page(State(store)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert_element_exists(&html, "#monthly-spending-chart");
        assert_element_exists(&html, "#category-spending-chart");
        assert_element_exists(&html, "#recent-transactions table");
        assert_element_exists(&html, "#category-spending table");
        assert_element_exists(&html, "#monthly-spending table");
    }

    #[tokio::test]
    async fn shows_at_most_ten_recent_transactions() {
        let file = TempFile::new("shows_at_most_ten_recent_transactions");
        let transactions: Vec<Transaction> = (1..=12)
            .map(|day| {
                Transaction::new(
                    time::Date::from_calendar_date(2024, time::Month::March, day).unwrap(),
                    "Food",
                    1.0,
                    "",
                )
            })
            .collect();
        let store = store_with(&file, &transactions);

        let html = parse_html_document(get_dashboard_page(State(store)).await).await;

        let rows = table_rows(&html, "#recent-transactions tbody tr");
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0][0], "2024-03-12");
        assert_eq!(rows[9][0], "2024-03-03");
    }

    #[tokio::test]
    async fn shows_category_and_monthly_totals() {
        let file = TempFile::new("shows_category_and_monthly_totals");
        let store = store_with(
            &file,
            &[
                Transaction::new(date!(2024 - 01 - 15), "Food", 100.0, ""),
                Transaction::new(date!(2024 - 01 - 20), "Transport", 50.0, ""),
                Transaction::new(date!(2024 - 02 - 10), "Food", 30.0, ""),
            ],
        );

        let html = parse_html_document(get_dashboard_page(State(store)).await).await;

        assert_eq!(
            table_rows(&html, "#category-spending tbody tr"),
            vec![
                vec!["Food".to_owned(), "$130.00".to_owned()],
                vec!["Transport".to_owned(), "$50.00".to_owned()],
            ]
        );
        assert_eq!(
            table_rows(&html, "#monthly-spending tbody tr"),
            vec![
                vec!["2024-01".to_owned(), "$150.00".to_owned()],
                vec!["2024-02".to_owned(), "$30.00".to_owned()],
            ]
        );
    }

    #[tokio::test]
    async fn category_names_cannot_inject_scripts() {
        let file = TempFile::new("dashboard_category_names_cannot_inject_scripts");
        let injected = "<script>alert(1)</script>";
        let store = store_with(
            &file,
            &[Transaction::new(
                date!(2024 - 01 - 15),
                &format!("</script>{injected}"),
                10.0,
                "",
            )],
        );

        let response = get_dashboard_page(State(store)).await;

        assert_status_ok(&response);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8_lossy(&body);
        assert_eq!(
            text.matches(injected).count(),
            0,
            "category text ended the chart script: {text}"
        );
    }

    #[tokio::test]
    async fn displays_prompt_text_on_no_data() {
        let file = TempFile::new("dashboard_displays_prompt_text_on_no_data");
        let store = store_with(&file, &[]);

        let response = get_dashboard_page(State(store)).await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let heading: String = html
            .select(&Selector::parse("h2").unwrap())
            .flat_map(|h2| h2.text())
            .collect();
        assert_eq!(heading.trim(), "Nothing here yet...");
        assert!(
            html.select(&Selector::parse("table").unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn unreadable_file_shows_prompt_instead_of_error() {
        let file = TempFile::new("dashboard_unreadable_file");
        std::fs::write(file.path(), "this is not,the right header\n1,2\n").unwrap();
        let store = TransactionStore::new(file.path());

        let response = get_dashboard_page(State(store)).await;

        assert_status_ok(&response);
    }

    #[track_caller]
    fn assert_element_exists(html: &Html, selector: &str) {
        assert!(
            html.select(&Selector::parse(selector).unwrap())
                .next()
                .is_some(),
            "Element '{selector}' not found"
        );
    }

    fn table_rows(html: &Html, selector: &str) -> Vec<Vec<String>> {
        let cell_selector = Selector::parse("th, td").unwrap();

        html.select(&Selector::parse(selector).unwrap())
            .map(|row| {
                row.select(&cell_selector)
                    .map(|cell| cell.text().collect::<String>().trim().to_owned())
                    .collect()
            })
            .collect()
    }
}
