//! textfmt - IBAN grouping and locale-aware slug formatting
//!
//! Two independent, pure text formatters behind a common [`TextFormatter`] trait:
//! - [`IbanFormatter`] groups account numbers into blocks of four
//! - [`SlugFormatter`] transliterates text into URL-safe slugs using
//!   locale-layered substitution rules

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use format::{FormatterKind, IbanFormatter, SlugFormatter, TextFormatter};
