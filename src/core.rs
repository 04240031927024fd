//! Core Elm Architecture implementation
//!
//! This module contains the core components of the application:
//! - Navigation back stack and bottom bar
//! - The observable user store
//! - Messages, commands, state and the pure update function
//! - Translation of terminal input into messages

pub mod cmd;
pub mod msg;
pub mod navigation;
pub mod raw_msg;
pub mod state;
pub mod store;
pub mod translator;
pub mod update;
