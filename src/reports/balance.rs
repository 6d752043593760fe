//! Balance Report
//!
//! Totals income and expenses across the store and derives the net balance.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, TransactionKind};
use crate::storage::TransactionStore;

/// Income, expense and net balance over every transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expense: Money,
    /// Income minus expense
    pub balance: Money,
    /// Number of transactions the report covers
    pub transaction_count: usize,
}

impl BalanceReport {
    /// Generate the report from the store
    ///
    /// Totals that do not fit in `Money` are a `Validation` error.
    pub fn generate(store: &TransactionStore) -> TrackerResult<Self> {
        if store.is_empty() {
            return Ok(Self::empty());
        }

        let out_of_range = || TrackerError::Validation("Balance totals out of range".into());
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for txn in store.all() {
            let total = match txn.kind {
                TransactionKind::Income => &mut total_income,
                TransactionKind::Expense => &mut total_expense,
            };
            *total = total.checked_add(txn.amount).ok_or_else(out_of_range)?;
        }

        Ok(Self {
            total_income,
            total_expense,
            balance: total_income
                .checked_sub(total_expense)
                .ok_or_else(out_of_range)?,
            transaction_count: store.len(),
        })
    }

    /// All-zero report for an empty store
    pub fn empty() -> Self {
        Self {
            total_income: Money::zero(),
            total_expense: Money::zero(),
            balance: Money::zero(),
            transaction_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("\n--- Current Balance ---\n");
        output.push_str(&format!(
            "Total Income:  {}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expense: {}\n",
            self.total_expense.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Net Balance:   {}\n",
            self.balance.format_with_symbol(symbol)
        ));
        output.push_str(&"-".repeat(23));
        output.push('\n');

        output
    }

    /// Write the report to a terminal or any other writer
    pub fn write_terminal<W: Write>(&self, writer: &mut W, symbol: &str) -> TrackerResult<()> {
        writer
            .write_all(self.format_terminal(symbol).as_bytes())
            .map_err(|e| TrackerError::Io(e.to_string()))
    }
}
