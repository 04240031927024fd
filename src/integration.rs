//! Integration layer
//!
//! Wires the core to the outside world:
//! - The composition root building the dependency graph
//! - Command execution against the store and repository
//! - The main loop tying terminal events, state updates and rendering together

pub mod app_runner;
pub mod cmd_executor;
pub mod container;
