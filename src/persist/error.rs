use std::io;
use std::string::FromUtf8Error;

use derive_more::{Display, Error, From, IsVariant};

use crate::collections::hash::open::TableFull;

/// The result of every save and load operation.
pub type Result<T> = std::result::Result<T, PersistError>;

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum PersistError {
    Io(io::Error),
    Format(FormatError),
    TableFull(TableFull),
}

/// Data read from a file that doesn't match the expected encoding.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, IsVariant)]
pub enum FormatError {
    #[display("missing count header")]
    MissingHeader,
    #[display("invalid count {_0:?}")]
    InvalidCount(#[error(not(source))] String),
    #[display("header is missing its {_0} field")]
    MissingField(#[error(not(source))] &'static str),
    #[display("expected {expected} records but only found {found}")]
    MissingRecord {
        expected: usize,
        found: usize,
    },
    #[display("invalid key {_0:?}")]
    InvalidKey(#[error(not(source))] String),
    #[display("invalid tree marker {_0}")]
    InvalidMarker(#[error(not(source))] i32),
    #[display("negative length or count {_0}")]
    NegativeLength(#[error(not(source))] i32),
    #[display("string is not valid UTF-8")]
    InvalidUtf8(FromUtf8Error),
    #[display("length or count {_0} doesn't fit in 4 bytes")]
    LengthOverflow(#[error(not(source))] usize),
    #[display("tree ended before every node's children were read")]
    TruncatedTree,
    #[display("capacity {_0} is larger than a load will allocate")]
    CapacityTooLarge(#[error(not(source))] usize),
    #[display("capacity {cap} can't hold {len} entries")]
    CapacityBelowSize {
        cap: usize,
        len: usize,
    },
}
