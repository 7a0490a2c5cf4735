//! Aggregations of transactions for the dashboard and insights pages.
//!
//! Every function here sums `amount` as is, so income recorded as a
//! negative amount reduces the totals.

use std::collections::HashMap;

use time::{Date, Duration};

use crate::transaction::Transaction;

/// The number of rows shown in the recent transactions table.
pub(crate) const RECENT_TRANSACTION_COUNT: usize = 10;

/// The number of categories listed on the insights page.
pub(crate) const TOP_CATEGORY_COUNT: usize = 3;

/// The first day of the month that `date` falls in.
pub(crate) fn month_of(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

/// Formats a month (as returned by [month_of]) as `YYYY-MM`.
pub(crate) fn format_month(month: Date) -> String {
    format!("{}-{:02}", month.year(), u8::from(month.month()))
}

/// The `count` most recent transactions, newest first.
///
/// Transactions on the same date are ordered with the last one added first.
pub(crate) fn recent_transactions(transactions: &[Transaction], count: usize) -> Vec<&Transaction> {
    let mut recent: Vec<&Transaction> = transactions.iter().rev().collect();
    // Stable sort keeps the reversed file order for equal dates.
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(count);
    recent
}

/// The summed amount for each category, largest first.
///
/// Categories with equal totals are ordered by name.
pub(crate) fn totals_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    let mut sorted: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(category, total)| (category.to_owned(), total))
        .collect();
    sorted.sort_by(|(a_category, a_total), (b_category, b_total)| {
        b_total
            .total_cmp(a_total)
            .then_with(|| a_category.cmp(b_category))
    });
    sorted
}

/// The summed amount for each month that has transactions, in chronological order.
///
/// Months are given as the first day of the month.
pub(crate) fn totals_by_month(transactions: &[Transaction]) -> Vec<(Date, f64)> {
    let mut totals: HashMap<Date, f64> = HashMap::new();

    for transaction in transactions {
        *totals.entry(month_of(transaction.date)).or_insert(0.0) += transaction.amount;
    }

    let mut sorted: Vec<(Date, f64)> = totals.into_iter().collect();
    sorted.sort_by_key(|(month, _)| *month);
    sorted
}

/// The sum of all transaction amounts.
pub(crate) fn total_spending(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|transaction| transaction.amount).sum()
}

/// The mean of the monthly totals, or `None` if there are no transactions.
pub(crate) fn average_monthly_spending(transactions: &[Transaction]) -> Option<f64> {
    let monthly_totals = totals_by_month(transactions);

    if monthly_totals.is_empty() {
        return None;
    }

    let sum: f64 = monthly_totals.iter().map(|(_, total)| total).sum();
    Some(sum / monthly_totals.len() as f64)
}

/// The `count` categories with the largest summed amount, largest first.
pub(crate) fn top_categories(transactions: &[Transaction], count: usize) -> Vec<(String, f64)> {
    let mut totals = totals_by_category(transactions);
    totals.truncate(count);
    totals
}
