//! Domain types
//!
//! This module contains the plain values the rest of the application passes around:
//! - User records
//! - Text helpers for fitting values into terminal cells

pub mod text;
pub mod user;

pub use user::User;
