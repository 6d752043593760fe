//! Reports module for the finance tracker
//!
//! Provides reporting over the transaction store.

pub mod balance;

pub use balance::BalanceReport;
