//! Error taxonomy for the conversion pipeline
//!
//! Almost everything in the pipeline recovers locally (sniffing falls back,
//! ragged rows are padded or truncated). The variants here are the few
//! conditions that must reach the caller as distinct failures.

use thiserror::Error;

/// A fatal condition for a single conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The requested format key does not match any known output format.
    #[error("unsupported format: {0:?}")]
    UnknownFormat(String),

    /// The input has no parseable columns, or a format that requires at
    /// least one data row was given none.
    #[error("input contains no usable rows")]
    EmptyInput,

    /// An explicitly requested dialect is unusable (missing definition,
    /// or a delimiter that is not exactly one ASCII character).
    #[error("invalid dialect: {0}")]
    BadDialect(String),
}
