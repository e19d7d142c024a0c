//! Input sources: files given on the command line and stdin

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::batch::format_stream;
use crate::format::TextFormatter;
use crate::Result;

/// Where a batch of values comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Map command-line inputs to sources, in order
///
/// Every `-` is stdin. With no inputs and no direct values, stdin is read
/// implicitly.
#[must_use]
pub fn resolve_inputs(inputs: &[PathBuf], has_values: bool) -> Vec<InputSource> {
    if inputs.is_empty() {
        return if has_values {
            Vec::new()
        } else {
            vec![InputSource::Stdin]
        };
    }

    inputs
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                InputSource::Stdin
            } else {
                InputSource::File(path.clone())
            }
        })
        .collect()
}

/// Format one source to `output`, returning the number of lines written
///
/// `stdin` is borrowed so that several `-` inputs share one reader; after the
/// first one has drained it, later ones write nothing.
pub fn format_source<R: BufRead, W: Write>(
    source: &InputSource,
    stdin: &mut R,
    output: &mut W,
    formatter: &dyn TextFormatter,
    parallel: bool,
) -> Result<usize> {
    match source {
        InputSource::Stdin => format_stream(stdin, output, formatter, parallel),
        InputSource::File(path) => format_file(path, output, formatter, parallel),
    }
}

fn format_file<W: Write>(
    path: &Path,
    output: &mut W,
    formatter: &dyn TextFormatter,
    parallel: bool,
) -> Result<usize> {
    let reader = BufReader::new(File::open(path)?);
    format_stream(reader, output, formatter, parallel)
}
