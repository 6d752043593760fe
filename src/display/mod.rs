//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_transaction_list, format_transaction_row, NO_TRANSACTIONS};
