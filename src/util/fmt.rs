use std::fmt::{self, Debug, Formatter};

/// Writes the wrapped string verbatim when formatted with `{:?}`, so that pre-rendered entries can
/// be passed to [`Formatter::debug_list`] without being quoted.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
