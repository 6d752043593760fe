//! Configuration module for the finance tracker
//!
//! This module provides configuration management including:
//! - Data file and companion path resolution
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
