use std::fmt::Display;
use std::io::{Read, Write};

use super::{FormatError, Result, binary};

/// A single element that can be written as one line of text or as a binary field.
///
/// The text form is the value's [`Display`] output and must not contain a newline.
pub trait Record: Display + Sized {
    fn parse_text(line: &str) -> std::result::Result<Self, FormatError>;

    fn write_binary(&self, writer: &mut impl Write) -> Result<()>;

    fn read_binary(reader: &mut impl Read) -> Result<Self>;
}

/// Strings are written as a 4-byte length followed by their UTF-8 bytes.
impl Record for String {
    fn parse_text(line: &str) -> std::result::Result<Self, FormatError> {
        Ok(line.to_owned())
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        binary::write_bytes(writer, self.as_bytes())
    }

    fn read_binary(reader: &mut impl Read) -> Result<Self> {
        let bytes = binary::read_bytes(reader)?;
        Ok(String::from_utf8(bytes).map_err(FormatError::InvalidUtf8)?)
    }
}

impl Record for i32 {
    fn parse_text(line: &str) -> std::result::Result<Self, FormatError> {
        line.trim().parse().map_err(|_| FormatError::InvalidKey(line.to_owned()))
    }

    fn write_binary(&self, writer: &mut impl Write) -> Result<()> {
        binary::write_i32(writer, *self)
    }

    fn read_binary(reader: &mut impl Read) -> Result<Self> {
        binary::read_i32(reader)
    }
}
