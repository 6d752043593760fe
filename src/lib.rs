//! Finance Tracker - terminal-based personal income and expense tracker
//!
//! Records income and expense transactions, lists them, and reports the
//! running balance. The whole history lives in one JSON file that is loaded
//! at startup and rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file location and user settings
//! - `error`: Custom error types
//! - `models`: Money and the transaction record
//! - `storage`: JSON file storage and the in-memory transaction store
//! - `services`: Validated transaction creation
//! - `display`: Transaction list formatting
//! - `reports`: Balance report
//! - `audit`: Audit logging system
//! - `cli`: The interactive menu session
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::cli::Session;
//! use finance_tracker::config::{Settings, TrackerPaths};
//!
//! let paths = TrackerPaths::new();
//! let settings = Settings::load_or_default(&paths)?;
//! let stdin = std::io::stdin();
//! Session::new(&paths, settings, stdin.lock(), std::io::stdout()).run()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
