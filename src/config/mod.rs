//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Store file path resolution
//! - Optional user settings (display currency, user name)

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
