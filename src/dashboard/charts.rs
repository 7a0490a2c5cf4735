//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for spending data:
//! - **Monthly Spending Chart**: Total amount per month
//! - **Category Spending Chart**: Total amount per category, largest first
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::bar,
};
use maud::{Markup, PreEscaped, html};
use time::Date;

use crate::{html::HeadElement, summary::format_month};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Escapes `</` and `<!--` so text such as a category named `</script>`
/// cannot end the enclosing script element. Both escapes read the same
/// inside a JS string.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/").replace("<!--", "<\\!--")
}

pub(super) fn monthly_spending_chart(monthly_totals: &[(Date, f64)]) -> Chart {
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|(month, _)| format_month(*month))
        .collect();
    let values: Vec<f64> = monthly_totals.iter().map(|(_, total)| *total).collect();

    Chart::new()
        .title(Title::new().text("Monthly Spending"))
        .tooltip(currency_tooltip())
        .grid(default_grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Spending").data(values))
}

pub(super) fn category_spending_chart(category_totals: &[(String, f64)]) -> Chart {
    let labels: Vec<String> = category_totals
        .iter()
        .map(|(category, _)| category.clone())
        .collect();
    let values: Vec<f64> = category_totals.iter().map(|(_, total)| *total).collect();

    Chart::new()
        .title(Title::new().text("Spending by Category"))
        .tooltip(currency_tooltip())
        .grid(default_grid())
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Spending").data(values))
}

fn default_grid() -> Grid {
    Grid::new()
        .left("3%")
        .right("4%")
        .bottom("3%")
        .contain_label(true)
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
