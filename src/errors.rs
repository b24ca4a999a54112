/// An error building a code tree or seeding a [`SymbolTable`].
///
/// [`SymbolTable`]: crate::SymbolTable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A symbol table needs at least one character to build a tree from.
    #[error("cannot build a symbol table from empty input")]
    EmptyInput,

    // Unreachable through `SymbolTable`, which never holds an empty corpus.
    #[error("cannot build a code tree over an empty alphabet")]
    EmptyAlphabet,
}

/// A character that has no leaf in the current tree.
///
/// Lookups recover from this per character; it is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("'{symbol}' not known to the tree")]
pub struct SymbolNotFound {
    pub symbol: char,
}
