//! Audit entry data structures
//!
//! Defines the operations that are recorded and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Types of store events that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A transaction was appended
    Create,
    /// The store was loaded from disk
    Load,
    /// The store was written to disk
    Save,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Load => write!(f, "LOAD"),
            Operation::Save => write!(f, "SAVE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// 1-based position of the affected transaction (creates only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Number of records in the store after the operation
    pub record_count: usize,

    /// JSON representation of the created transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a transaction appended at `position` (1-based)
    pub fn create(position: usize, txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            position: Some(position),
            record_count: position,
            after: serde_json::to_value(txn).ok(),
            summary: Some(txn.to_string()),
        }
    }

    /// Entry for a load; `summary` explains an empty start if there was one
    pub fn load(record_count: usize, summary: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Load,
            position: None,
            record_count,
            after: None,
            summary,
        }
    }

    /// Entry for a successful save
    pub fn save(record_count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Save,
            position: None,
            record_count,
            after: None,
            summary: None,
        }
    }
}
