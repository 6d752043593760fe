//! Transaction display formatting

use crate::models::Transaction;

/// Shown instead of a list when the store is empty
pub const NO_TRANSACTIONS: &str = "No transactions recorded yet.";

/// Format a single transaction as a numbered list row
pub fn format_transaction_row(number: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{}. Type: {}, Amount: {}, Category: {}, Description: {}",
        number,
        txn.kind,
        txn.amount.format_with_symbol(symbol),
        txn.category,
        txn.description
    )
}

/// Format all transactions, numbered from 1 in insertion order
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return format!("{}\n", NO_TRANSACTIONS);
    }

    let mut output = String::new();
    output.push_str("\n--- All Transactions ---\n");

    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, symbol));
        output.push('\n');
    }

    output.push_str(&"-".repeat(24));
    output.push('\n');
    output
}
