//! Transaction management for the spending tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and parsing of its form fields
//! - The CSV store that loads and saves transactions
//! - The page and endpoint for adding a transaction

mod add_endpoint;
mod add_page;
mod core;
mod store;

pub use add_endpoint::add_transaction_endpoint;
pub use add_page::get_add_transaction_page;
pub use core::Transaction;
pub use store::TransactionStore;

#[cfg(test)]
pub use add_endpoint::TransactionForm;
