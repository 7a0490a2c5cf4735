//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{Error, transaction::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The CSV file holding all transactions.
    pub transaction_store: TransactionStore,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] backed by `transaction_store`.
    ///
    /// This function will create the transactions file with only the header
    /// row if it does not exist yet.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an error if the transactions file cannot be created.
    pub fn new(transaction_store: TransactionStore, local_timezone: &str) -> Result<Self, Error> {
        transaction_store.ensure_file_exists()?;

        Ok(Self {
            transaction_store,
            local_timezone: local_timezone.to_owned(),
        })
    }
}

impl FromRef<AppState> for TransactionStore {
    fn from_ref(state: &AppState) -> Self {
        state.transaction_store.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::{test_utils::TempFile, transaction::TransactionStore};

    use super::AppState;

    #[test]
    fn creates_transactions_file() {
        let file = TempFile::new("app_state_creates_transactions_file");

        let state = AppState::new(TransactionStore::new(file.path()), "Etc/UTC").unwrap();

        assert!(file.path().exists());
        assert_eq!(state.transaction_store.load_transactions(), vec![]);
        assert_eq!(state.local_timezone, "Etc/UTC");
    }
}
