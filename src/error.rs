//! Errors returned while building an index or running a query.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// N-gram range or query parameters can't be used. Raised before any
    /// index or query work is done.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The dictionary must consist of distinct words.
    #[error("word {word:?} is already indexed at position {position}")]
    DuplicateWord { word: String, position: usize },
}

impl Error {
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
