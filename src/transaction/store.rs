//! Persists transactions to a CSV file.
//!
//! The file is the whole database: it is read in full on every load and
//! rewritten in full on every save.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Error, transaction::Transaction};

/// The header row of the transactions CSV file.
pub const CSV_HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// A handle to the CSV file holding all transactions.
///
/// Clones share the same lock, so appends made through any clone in this
/// process are serialized.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl TransactionStore {
    /// Create a store backed by the CSV file at `path`.
    ///
    /// The file is not touched until it is loaded or saved, call
    /// [TransactionStore::ensure_file_exists] to create it up front.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the CSV file with only the header row if it does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created.
    pub fn ensure_file_exists(&self) -> Result<(), Error> {
        let _guard = self.lock()?;

        if self.path.exists() {
            return Ok(());
        }

        tracing::info!("Creating empty transactions file {}", self.path.display());
        write_transactions(&self.path, &[])
    }

    /// Load every transaction in file order.
    ///
    /// Any error, such as a missing file, a malformed row or a date that
    /// cannot be parsed, is logged and an empty list is returned.
    pub fn load_transactions(&self) -> Vec<Transaction> {
        let _guard = match self.lock() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };

        read_transactions(&self.path).unwrap_or_else(|error| {
            tracing::error!("Error loading transactions: {error}");
            Vec::new()
        })
    }

    /// Overwrite the file with `transactions`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written. The error is also logged.
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let _guard = self.lock()?;

        write_transactions(&self.path, transactions)
            .inspect_err(|error| tracing::error!("Error saving transactions: {error}"))
    }

    /// Append `transaction` to the end of the file.
    ///
    /// A missing file is treated as empty and created. Unlike
    /// [TransactionStore::load_transactions], an existing file that cannot be
    /// read is an error and is left untouched.
    ///
    /// Returns the number of transactions in the file after the append.
    ///
    /// # Errors
    /// Returns an error if the lock is poisoned, the existing file cannot be
    /// read or the file cannot be written.
    pub fn append_transaction(&self, transaction: Transaction) -> Result<usize, Error> {
        let _guard = self.lock()?;

        let mut transactions = if self.path.exists() {
            read_transactions(&self.path)
                .inspect_err(|error| tracing::error!("Error loading transactions: {error}"))?
        } else {
            Vec::new()
        };
        transactions.push(transaction);

        write_transactions(&self.path, &transactions)
            .inspect_err(|error| tracing::error!("Error saving transactions: {error}"))?;

        tracing::debug!(
            "Saved {} transactions to {}",
            transactions.len(),
            self.path.display()
        );

        Ok(transactions.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, Error> {
        self.lock
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire transactions lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

fn read_transactions(path: &Path) -> Result<Vec<Transaction>, Error> {
    let mut reader = csv::Reader::from_path(path)?;

    reader
        .deserialize::<Transaction>()
        .collect::<Result<Vec<_>, csv::Error>>()
        .map_err(Error::from)
}

/// Write all rows to a temporary sibling file and then move it over `path`,
/// so readers never see a partially written file.
fn write_transactions(path: &Path, transactions: &[Transaction]) -> Result<(), Error> {
    let temp_path = path.with_extension("csv.tmp");

    {
        let mut writer = csv::Writer::from_path(&temp_path)?;

        // The header is written by `serialize` with the first row.
        if transactions.is_empty() {
            writer.write_record(CSV_HEADER)?;
        }

        for transaction in transactions {
            writer.serialize(transaction)?;
        }

        writer.flush()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}
