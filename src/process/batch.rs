//! Line-oriented batch formatting

use std::io::{BufRead, Write};

use rayon::prelude::*;

use crate::format::TextFormatter;
use crate::Result;

/// Format every value, preserving order
///
/// With `parallel` the values are distributed over the global rayon pool.
#[must_use]
pub fn format_values(
    values: &[String],
    formatter: &dyn TextFormatter,
    parallel: bool,
) -> Vec<String> {
    if parallel {
        values.par_iter().map(|v| formatter.format(v)).collect()
    } else {
        values.iter().map(|v| formatter.format(v)).collect()
    }
}

/// Read one newline-terminated value, without its `\n` or `\r\n`
///
/// Invalid UTF-8 is decoded lossily so a single bad line cannot abort the stream.
fn read_value<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Read newline-separated values, format each and write one line per value
///
/// Sequentially, every line is written as soon as it has been read, so piped
/// input produces output before EOF. In parallel mode the input is collected
/// first and formatted on the rayon pool. Returns the number of lines written.
pub fn format_stream<R: BufRead, W: Write>(
    mut reader: R,
    output: &mut W,
    formatter: &dyn TextFormatter,
    parallel: bool,
) -> Result<usize> {
    let mut buf = Vec::new();
    let mut count = 0;

    if parallel {
        let mut values = Vec::new();
        while let Some(value) = read_value(&mut reader, &mut buf)? {
            values.push(value);
        }
        for line in format_values(&values, formatter, true) {
            writeln!(output, "{line}")?;
            count += 1;
        }
    } else {
        while let Some(value) = read_value(&mut reader, &mut buf)? {
            writeln!(output, "{}", formatter.format(&value))?;
            count += 1;
        }
    }
    output.flush()?;

    Ok(count)
}
