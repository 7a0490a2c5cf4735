//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::get_dashboard_page,
    endpoints,
    insights::get_insights_page,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{add_transaction_endpoint, get_add_transaction_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::ADD_TRANSACTION_VIEW,
            get(get_add_transaction_page).post(add_transaction_endpoint),
        )
        .route(endpoints::INSIGHTS_VIEW, get(get_insights_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
