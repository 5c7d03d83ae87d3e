use thiserror::Error;

/// Errors returned while configuring a generator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid prefix length {len}; expected 1..={max}")]
    InvalidPrefixLength { len: usize, max: usize },
}
