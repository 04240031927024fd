//! # Userdeck - a user list TUI
//!
//! A small terminal client that lists mocked users fetched through a delayed
//! repository. It is organised around a unidirectional data flow:
//!
//! - **Data source** (`infrastructure::user_data_source`): fixed records after a simulated latency
//! - **Repository** (`repositories`): the seam the presentation layer depends on
//! - **Store** (`core::store`): the latest user list as observable state
//! - **UI tree** (`core`, `presentation`): a two-route navigator with a bottom bar,
//!   driven by an Elm-like update function and rendered with ratatui
//! - **Composition root** (`integration::container`): builds the dependency graph once
//!
//! ## Example Usage
//!
//! ```rust
//! use userdeck::core::{msg::Msg, navigation::{BottomBarAction, Route}, update::{init, update}};
//!
//! let (state, _commands) = init();
//! let (state, commands) = update(Msg::BottomBarPressed(BottomBarAction::Detail), state);
//!
//! assert_eq!(state.current_route(), &Route::detail("123"));
//! assert_eq!(commands.len(), 1);
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod repositories;
pub mod utils;

pub use crate::core::{cmd::Cmd, msg::Msg, state::AppState, store::UserStore, update::update};
pub use domain::User;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
