//! Line-oriented helpers shared by every text encoding. A file is a header line followed by one
//! record per line; only a single trailing `\n` is stripped from each line.

use std::fmt::Display;
use std::io::{BufRead, Write};

use super::{FormatError, Record, Result};

/// Reads one line without its trailing newline, or None at the end of the stream.
pub(crate) fn read_line(reader: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
    }
    Ok(Some(line))
}

pub(crate) fn parse_count(field: &str) -> std::result::Result<usize, FormatError> {
    field.trim().parse().map_err(|_| FormatError::InvalidCount(field.to_owned()))
}

/// Reads a header line holding a single count.
pub(crate) fn read_count(reader: &mut impl BufRead) -> Result<usize> {
    let line = read_line(reader)?.ok_or(FormatError::MissingHeader)?;
    Ok(parse_count(&line)?)
}

/// Writes a count line followed by each record's [`Display`] output on its own line.
pub(crate) fn write_records(
    writer: &mut impl Write,
    count: usize,
    records: impl IntoIterator<Item = impl Display>,
) -> Result<()> {
    writeln!(writer, "{count}")?;
    for record in records {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}

/// Reads exactly `count` lines, parsing each as a record and passing it to `insert`.
pub(crate) fn read_records<R: Record>(
    reader: &mut impl BufRead,
    count: usize,
    mut insert: impl FnMut(R),
) -> Result<()> {
    for found in 0..count {
        let line = read_line(reader)?.ok_or(FormatError::MissingRecord { expected: count, found })?;
        insert(R::parse_text(&line)?);
    }
    Ok(())
}
