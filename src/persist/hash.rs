use std::io::{BufRead, Read, Write};

use super::{FormatError, Persist, Record, Result, binary, text};
use crate::collections::hash::open::DEFAULT_CAP;
use crate::collections::hash::{ChainedHashTable, OpenHashTable};

/// The largest capacity a load will allocate for an [`OpenHashTable`].
pub(crate) const MAX_LOADED_CAP: usize = 1 << 24;

/// Checks a capacity read from a file before any slots are allocated for it. A capacity of 0
/// stands for the default, the same as in [`OpenHashTable::with_cap`].
fn checked_cap(cap: usize, len: usize) -> std::result::Result<usize, FormatError> {
    if cap > MAX_LOADED_CAP {
        return Err(FormatError::CapacityTooLarge(cap));
    }

    let slots = if cap == 0 { DEFAULT_CAP } else { cap };
    if len > slots {
        return Err(FormatError::CapacityBelowSize { cap, len });
    }
    Ok(cap)
}

/// Only keys are written. Each one is loaded back with an empty value, once per entry that held
/// it.
impl Persist for ChainedHashTable {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn write_text(&self, writer: &mut impl Write) -> Result<()> {
        text::write_records(writer, self.len(), self.keys())
    }

    fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()> {
        let count = text::read_count(reader)?;
        self.clear();
        text::read_records(reader, count, |key: String| self.insert(key, ""))
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        binary::write_strings(writer, self.len(), self.keys())
    }

    fn read_binary(&mut self, reader: &mut impl Read) -> Result<()> {
        let count = binary::read_len(reader)?;
        self.clear();
        binary::read_records(reader, count, |key: String| self.insert(key, ""))
    }
}

/// The capacity is written ahead of the live entries, which are written in slot order. Loading
/// allocates a table of exactly that capacity before inserting them, so tombstones aren't carried
/// over.
impl Persist for OpenHashTable {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn write_text(&self, writer: &mut impl Write) -> Result<()> {
        writeln!(writer, "{} {}", self.cap(), self.len())?;
        for (key, value) in self.iter() {
            writeln!(writer, "{key}\t{value}")?;
        }
        Ok(())
    }

    fn read_text(&mut self, reader: &mut impl BufRead) -> Result<()> {
        let header = text::read_line(reader)?.ok_or(FormatError::MissingHeader)?;
        let mut fields = header.split_whitespace();
        let cap = text::parse_count(fields.next().ok_or(FormatError::MissingHeader)?)?;
        let len = text::parse_count(fields.next().ok_or(FormatError::MissingField("size"))?)?;

        *self = OpenHashTable::with_cap(checked_cap(cap, len)?);
        for found in 0..len {
            let line = text::read_line(reader)?
                .ok_or(FormatError::MissingRecord { expected: len, found })?;
            let (key, value) = line.split_once('\t').unwrap_or((line.as_str(), ""));
            self.insert(key, value)?;
        }
        Ok(())
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        binary::write_len(writer, self.cap())?;
        binary::write_len(writer, self.len())?;
        for (key, value) in self.iter() {
            binary::write_bytes(writer, key.as_bytes())?;
            binary::write_bytes(writer, value.as_bytes())?;
        }
        Ok(())
    }

    fn read_binary(&mut self, reader: &mut impl Read) -> Result<()> {
        let cap = binary::read_len(reader)?;
        let len = binary::read_len(reader)?;

        *self = OpenHashTable::with_cap(checked_cap(cap, len)?);
        for _ in 0..len {
            let key = String::read_binary(reader)?;
            let value = String::read_binary(reader)?;
            self.insert(key, value)?;
        }
        Ok(())
    }
}
