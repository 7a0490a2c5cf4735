//! The endpoint URIs.

/// The dashboard with recent transactions and spending totals.
pub const ROOT: &str = "/";
/// The page with the form for adding a transaction, also accepts the form POST.
pub const ADD_TRANSACTION_VIEW: &str = "/add_transaction";
/// The page with total spending, the monthly average and top categories.
pub const INSIGHTS_VIEW: &str = "/insights";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::ADD_TRANSACTION_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INSIGHTS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
    }
}
