//! Presentation layer
//!
//! Stateless ratatui components that render the UI tree from [`AppState`](crate::core::state::AppState)
//! and the user store's current snapshot.

pub mod components;
pub mod config;
