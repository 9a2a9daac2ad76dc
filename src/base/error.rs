/// An error that occurred while turning source code into tokens.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("An error occurred while tokenizing the source code: {0} lexical error(s) reported")]
    LexicalErrors(usize),
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
