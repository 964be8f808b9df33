use std::str::FromStr;

use derive_more::{Display, Error, IsVariant};

/// The two encodings every [`Persist`](super::Persist) type can be saved in.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant)]
pub enum Format {
    /// Line-oriented UTF-8, one record per line after a decimal count header.
    #[default]
    #[display("text")]
    Text,
    /// Little-endian 4-byte integers and length-prefixed byte strings.
    #[display("binary")]
    Binary,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown format {_0:?}, expected \"text\" or \"binary\"")]
pub struct UnknownFormat(#[error(not(source))] pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "binary" => Ok(Format::Binary),
            _ => Err(UnknownFormat(s.to_owned())),
        }
    }
}
