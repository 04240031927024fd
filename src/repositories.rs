//! Repositories
//!
//! The boundary the presentation layer depends on. Stores only ever see the
//! [`UserRepository`] trait, never the data source behind it.

pub mod user;

pub use user::{DataSourceUserRepository, UserRepository};
