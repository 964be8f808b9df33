//! Field helpers shared by every binary encoding. All integers, lengths and counts are 4-byte
//! little-endian `i32`s, and strings are a length followed by that many raw bytes.

use std::io::{self, ErrorKind, Read, Write};

use super::{FormatError, Record, Result};

pub(crate) fn write_i32(writer: &mut impl Write, value: i32) -> Result<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

pub(crate) fn read_i32(reader: &mut impl Read) -> Result<i32> {
    let mut bytes = [0; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}

/// Writes a length or count, which must fit in an `i32`.
pub(crate) fn write_len(writer: &mut impl Write, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| FormatError::LengthOverflow(len))?;
    write_i32(writer, len)
}

/// Reads a length or count, rejecting negative values.
pub(crate) fn read_len(reader: &mut impl Read) -> Result<usize> {
    let len = read_i32(reader)?;
    Ok(usize::try_from(len).map_err(|_| FormatError::NegativeLength(len))?)
}

pub(crate) fn write_bytes(writer: &mut impl Write, bytes: &[u8]) -> Result<()> {
    write_len(writer, bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

/// Reads a length-prefixed byte string. Only the bytes actually present are buffered, so a
/// corrupt length can't trigger a huge allocation; a short read is an
/// [`UnexpectedEof`](ErrorKind::UnexpectedEof) error.
pub(crate) fn read_bytes(reader: &mut impl Read) -> Result<Vec<u8>> {
    let len = read_len(reader)?;
    let mut bytes = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut bytes)?;

    if bytes.len() < len {
        let message = format!("string of {len} bytes ended after {}", bytes.len());
        return Err(io::Error::new(ErrorKind::UnexpectedEof, message).into());
    }
    Ok(bytes)
}

pub(crate) fn write_records<'a, R: Record + 'a>(
    writer: &mut impl Write,
    count: usize,
    records: impl IntoIterator<Item = &'a R>,
) -> Result<()> {
    write_len(writer, count)?;
    for record in records {
        record.write_binary(writer)?;
    }
    Ok(())
}

/// Writes a count followed by each string, for callers holding `&str` rather than a [`Record`].
pub(crate) fn write_strings<'a>(
    writer: &mut impl Write,
    count: usize,
    strings: impl IntoIterator<Item = &'a str>,
) -> Result<()> {
    write_len(writer, count)?;
    for string in strings {
        write_bytes(writer, string.as_bytes())?;
    }
    Ok(())
}

pub(crate) fn read_records<R: Record>(
    reader: &mut impl Read,
    count: usize,
    mut insert: impl FnMut(R),
) -> Result<()> {
    for _ in 0..count {
        insert(R::read_binary(reader)?);
    }
    Ok(())
}
