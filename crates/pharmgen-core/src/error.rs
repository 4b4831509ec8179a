use thiserror::Error;

/// Core error type shared across pharmgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset violates a record invariant.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
    /// An amount string could not be parsed back.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    /// A unit label is not part of the vocabulary.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
}

/// Convenience alias for results returned by pharmgen crates.
pub type Result<T> = std::result::Result<T, Error>;
