//! Path management for the finance tracker
//!
//! Everything lives next to the transactions file. By default that file is
//! `transactions.json` in the working directory; `--file` or the
//! `FINANCE_TRACKER_FILE` environment variable select another one.

use std::path::{Path, PathBuf};

/// Default name of the persisted transactions file
pub const DEFAULT_DATA_FILE: &str = "transactions.json";

/// Environment variable overriding the transactions file location
pub const DATA_FILE_ENV: &str = "FINANCE_TRACKER_FILE";

const SETTINGS_FILE: &str = "finance-settings.json";
const AUDIT_LOG_FILE: &str = "finance-audit.log";

/// Manages all paths used by the finance tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Use the default transactions file in the working directory
    pub fn new() -> Self {
        Self::with_data_file(DEFAULT_DATA_FILE)
    }

    /// Use a specific transactions file
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Directory holding the data file and its companions
    pub fn base_dir(&self) -> &Path {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Get the path to the transactions file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the path to the optional settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir().join(SETTINGS_FILE)
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir().join(AUDIT_LOG_FILE)
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new()
    }
}
