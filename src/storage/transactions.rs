//! Transaction store backed by a JSON file
//!
//! Holds the session's ordered list of transactions and moves it to and from
//! the persisted file in one piece.

use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::models::Transaction;

use super::file_io::{read_json, write_json_atomic};

/// What a successful load found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; holds the number of records
    Loaded(usize),
    /// No file yet, the store starts empty
    Missing,
}

/// The in-memory ordered list of transactions and the file it persists to
#[derive(Debug)]
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store bound to a data file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            transactions: Vec::new(),
        }
    }

    /// Path of the persisted file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the contents of the data file
    ///
    /// The list is cleared first, so on any error the store is left empty.
    /// Amounts are not re-validated.
    pub fn load(&mut self) -> Result<LoadOutcome, TrackerError> {
        self.transactions.clear();

        match read_json::<Vec<Transaction>, _>(&self.path)? {
            Some(transactions) => {
                self.transactions = transactions;
                Ok(LoadOutcome::Loaded(self.transactions.len()))
            }
            None => Ok(LoadOutcome::Missing),
        }
    }

    /// Overwrite the data file with the whole in-memory list
    pub fn save(&self) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, &self.transactions)
    }

    /// Append a transaction at the end of the list
    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
