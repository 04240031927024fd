//! Infrastructure layer
//!
//! External resources the application talks to:
//! - Command line and configuration files
//! - The mocked user data source
//! - The terminal

pub mod cli;
pub mod config;
pub mod tui;
pub mod user_data_source;
