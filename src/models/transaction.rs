//! Transaction model
//!
//! Represents a single income or expense record. Records carry no identifier;
//! their position in the store is the only addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Lowercase label, as stored in the data file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, always positive for records created in this program
    pub amount: Money,

    /// Free-text category label
    #[serde(default)]
    pub category: String,

    /// Free-text note
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction, rejecting amounts that are not positive
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TransactionValidationError> {
        Self::validate_amount(amount)?;
        Ok(Self {
            kind,
            amount,
            category: category.into(),
            description: description.into(),
        })
    }

    /// Shorthand for an income record
    pub fn income(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TransactionValidationError> {
        Self::new(TransactionKind::Income, amount, category, description)
    }

    /// Shorthand for an expense record
    pub fn expense(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TransactionValidationError> {
        Self::new(TransactionKind::Expense, amount, category, description)
    }

    /// Check an amount before any other input is collected for it
    pub fn validate_amount(amount: Money) -> Result<(), TransactionValidationError> {
        if amount.is_positive() {
            Ok(())
        } else {
            Err(TransactionValidationError::NonPositiveAmount(amount))
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.amount, self.category)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
