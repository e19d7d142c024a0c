//! Batch formatting of many values.
//!
//! Values are formatted one per line. Large batches can be spread over the
//! rayon thread pool; output order always matches input order.
//!
//! The main entry point is [`format_stream`] which processes a buffered reader
//! and writes formatted output to any `Write` implementation. [`input`] maps
//! command-line inputs (files and `-`) onto readers.

pub mod batch;
pub mod input;

pub use batch::{format_stream, format_values};
pub use input::{format_source, resolve_inputs, InputSource};
