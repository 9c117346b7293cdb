use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// No element equal to the requested value exists.
    NotFound,
    /// Index past the end of the sequence, or a traversal dereferenced after
    /// exhaustion.
    OutOfRange,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
