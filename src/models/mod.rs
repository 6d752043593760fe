//! Core data models for the finance tracker
//!
//! Money amounts and the income/expense transaction record.

pub mod money;
pub mod transaction;

pub use money::Money;
pub use transaction::{Transaction, TransactionKind};
