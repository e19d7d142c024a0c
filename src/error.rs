//! Error types and result aliases for textfmt.
//!
//! The formatters themselves never fail. Errors only arise in the ambient
//! layers (reading input, loading configuration):
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
