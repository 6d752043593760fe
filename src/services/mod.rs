//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and audit logging.

pub mod transaction;

pub use transaction::{CreateTransactionInput, CreatedTransaction, TransactionService};
