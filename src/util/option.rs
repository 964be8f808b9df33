pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Used
    /// where a collection's own bookkeeping guarantees that the value is present, e.g. an arena
    /// index stored in a live link.
    ///
    /// No panics annotation is used to allow it to pass the clippy lint. The whole semantics are
    /// that if used, the function indicates that None is impossible.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!(),
        }
    }
}
