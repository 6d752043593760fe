//! Transaction service
//!
//! Provides the business logic for recording income and expenses: amount
//! validation, appending to the store, and audit logging.

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::TransactionStore;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a mut TransactionStore,
    audit: Option<&'a AuditLogger>,
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub description: String,
}

/// A transaction that was appended to the store
#[derive(Debug)]
pub struct CreatedTransaction {
    pub transaction: Transaction,
    /// 1-based position in the store
    pub position: usize,
    /// Set when the record was stored but the audit entry could not be written
    pub audit_error: Option<TrackerError>,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a mut TransactionStore) -> Self {
        Self { store, audit: None }
    }

    /// Record an audit entry for every created transaction
    pub fn with_audit(mut self, audit: Option<&'a AuditLogger>) -> Self {
        self.audit = audit;
        self
    }

    /// Parse and validate an amount typed by the user
    ///
    /// Non-numeric input is `InvalidAmount`, zero or negative is
    /// `NonPositiveAmount`.
    pub fn parse_amount(input: &str) -> TrackerResult<Money> {
        let amount = Money::parse(input)?;
        Transaction::validate_amount(amount)?;
        Ok(amount)
    }

    /// Append a new transaction to the store
    ///
    /// Nothing is written to the data file; the caller decides when to save.
    pub fn create(&mut self, input: CreateTransactionInput) -> TrackerResult<CreatedTransaction> {
        let txn = Transaction::new(input.kind, input.amount, input.category, input.description)?;

        self.store.push(txn.clone());
        let position = self.store.len();

        let audit_error = self
            .audit
            .and_then(|logger| logger.log(&AuditEntry::create(position, &txn)).err());

        Ok(CreatedTransaction {
            transaction: txn,
            position,
            audit_error,
        })
    }
}
