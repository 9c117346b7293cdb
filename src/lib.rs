pub mod error;
pub mod sequence;

pub use error::Error;
pub use sequence::iter::Traversal;
pub use sequence::Sequence;

pub type Result<T> = std::result::Result<T, Error>;
