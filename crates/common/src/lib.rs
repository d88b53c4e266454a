//! Common utilities for todo
//!
//! Shared code used across all todo crates.

pub mod error;

pub use error::{Error, Result};
