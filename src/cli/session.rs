//! Interactive session
//!
//! Owns the transaction store for the lifetime of the program and drives the
//! menu loop: load once, then read a choice, dispatch, and persist after each
//! change until the user exits.

use std::io::{BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{Settings, TrackerPaths};
use crate::display::format_transaction_list;
use crate::display::NO_TRANSACTIONS;
use crate::error::{TrackerError, TrackerResult};
use crate::models::TransactionKind;
use crate::reports::BalanceReport;
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::{LoadOutcome, TransactionStore};

use super::menu::{MenuChoice, CHOICE_PROMPT, MENU};
use super::prompt::prompt_line;

const INVALID_AMOUNT: &str = "Invalid amount. Please enter a number (e.g., 100 or 50.50).";
const NON_POSITIVE_AMOUNT: &str = "Amount must be positive.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";
const GOODBYE: &str = "Exiting Personal Finance Manager. Goodbye!";

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// An interactive menu session over one transaction store
pub struct Session<R, W> {
    store: TransactionStore,
    settings: Settings,
    audit: Option<AuditLogger>,
    input: R,
    output: W,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session reading from `input` and printing to `output`
    pub fn new(paths: &TrackerPaths, settings: Settings, input: R, output: W) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            store: TransactionStore::new(paths.data_file()),
            settings,
            audit,
            input,
            output,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Load the store, then run the menu loop until the session terminates
    ///
    /// Only a failure of the console itself ends the loop with an error.
    pub fn run(&mut self) -> TrackerResult<()> {
        self.load()?;
        while self.state == SessionState::Running {
            self.step()?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Show the menu, read one choice and act on it
    pub fn step(&mut self) -> TrackerResult<()> {
        write!(self.output, "{}", MENU)?;

        let token = match prompt_line(&mut self.input, &mut self.output, CHOICE_PROMPT)? {
            Some(token) => token,
            None => {
                // End of input behaves like choosing Exit
                writeln!(self.output)?;
                return self.exit();
            }
        };

        let Some(choice) = MenuChoice::parse(&token) else {
            writeln!(self.output, "{}", INVALID_CHOICE)?;
            return Ok(());
        };

        match choice {
            MenuChoice::AddIncome | MenuChoice::AddExpense => {
                let kind = if choice == MenuChoice::AddIncome {
                    TransactionKind::Income
                } else {
                    TransactionKind::Expense
                };
                if self.add_transaction(kind)? {
                    self.save()?;
                }
                Ok(())
            }
            MenuChoice::View => self.list_transactions(),
            MenuChoice::Balance => self.show_balance(),
            MenuChoice::Exit => self.exit(),
        }
    }

    /// Replace the store with the data file contents, reporting problems
    ///
    /// Returns what was found on disk, or `None` when the store had to start
    /// empty because of an error.
    pub fn load(&mut self) -> TrackerResult<Option<LoadOutcome>> {
        let result = self.store.load();

        let (outcome, summary) = match result {
            Ok(LoadOutcome::Loaded(count)) => (Some(LoadOutcome::Loaded(count)), None),
            Ok(LoadOutcome::Missing) => {
                writeln!(
                    self.output,
                    "No existing transactions file found. Starting fresh."
                )?;
                (Some(LoadOutcome::Missing), Some("no data file".to_string()))
            }
            Err(e) if e.is_corrupted() => {
                writeln!(
                    self.output,
                    "Error reading transactions file. It might be corrupted. Starting fresh."
                )?;
                (None, Some(e.to_string()))
            }
            Err(e) => {
                writeln!(self.output, "Error loading transactions: {}. Starting fresh.", e)?;
                (None, Some(e.to_string()))
            }
        };

        self.record_audit(AuditEntry::load(self.store.len(), summary))?;
        Ok(outcome)
    }

    /// Write the store to the data file, reporting a failure
    ///
    /// Returns whether the file was written. The store is kept either way.
    pub fn save(&mut self) -> TrackerResult<bool> {
        match self.store.save() {
            Ok(()) => {
                self.record_audit(AuditEntry::save(self.store.len()))?;
                Ok(true)
            }
            Err(e) => {
                writeln!(self.output, "Error saving transactions: {}", e)?;
                Ok(false)
            }
        }
    }

    /// Prompt for a new transaction of `kind` and append it
    ///
    /// Returns whether a record was appended. Nothing is saved here.
    pub fn add_transaction(&mut self, kind: TransactionKind) -> TrackerResult<bool> {
        let category_prompt = match kind {
            TransactionKind::Income => "Enter income category (e.g., Salary, Gift): ",
            TransactionKind::Expense => "Enter expense category (e.g., Food, Transport, Rent): ",
        };

        let amount_prompt = format!("Enter {} amount: ", kind.as_str());
        let Some(amount_text) = prompt_line(&mut self.input, &mut self.output, &amount_prompt)?
        else {
            return Ok(false);
        };

        let amount = match TransactionService::parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(TrackerError::InvalidAmount(_)) => {
                writeln!(self.output, "{}", INVALID_AMOUNT)?;
                return Ok(false);
            }
            Err(TrackerError::NonPositiveAmount(_)) => {
                writeln!(self.output, "{}", NON_POSITIVE_AMOUNT)?;
                return Ok(false);
            }
            Err(e) => return Err(e),
        };

        let Some(category) = prompt_line(&mut self.input, &mut self.output, category_prompt)?
        else {
            return Ok(false);
        };
        let Some(description) =
            prompt_line(&mut self.input, &mut self.output, "Enter a brief description: ")?
        else {
            return Ok(false);
        };

        let created = TransactionService::new(&mut self.store)
            .with_audit(self.audit.as_ref())
            .create(CreateTransactionInput {
                kind,
                amount,
                category,
                description,
            })?;

        if let Some(e) = created.audit_error {
            writeln!(self.output, "Warning: {}", e)?;
        }
        writeln!(self.output, "{} added successfully!", created.transaction.kind)?;

        Ok(true)
    }

    /// Print every transaction in insertion order
    pub fn list_transactions(&mut self) -> TrackerResult<()> {
        let listing = format_transaction_list(self.store.all(), &self.settings.currency_symbol);
        write!(self.output, "{}", listing)?;
        Ok(())
    }

    /// Print income, expense and net balance totals
    pub fn show_balance(&mut self) -> TrackerResult<()> {
        let report = match BalanceReport::generate(&self.store) {
            Ok(report) => report,
            Err(e) => {
                writeln!(self.output, "Error computing balance: {}", e)?;
                return Ok(());
            }
        };
        if report.is_empty() {
            writeln!(self.output, "{}", NO_TRANSACTIONS)?;
        }
        report.write_terminal(&mut self.output, &self.settings.currency_symbol)
    }

    /// Save one last time and terminate
    fn exit(&mut self) -> TrackerResult<()> {
        self.save()?;
        writeln!(self.output, "{}", GOODBYE)?;
        self.state = SessionState::Terminated;
        Ok(())
    }

    fn record_audit(&mut self, entry: AuditEntry) -> TrackerResult<()> {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                writeln!(self.output, "Warning: {}", e)?;
            }
        }
        Ok(())
    }
}
