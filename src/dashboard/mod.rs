//! Dashboard module
//!
//! Provides the landing page with recent transactions, spending totals by
//! category and by month, and charts of those totals.

mod charts;
mod handlers;
mod tables;

pub use handlers::get_dashboard_page;
