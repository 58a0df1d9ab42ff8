//! Error definitions for the addition CGI program.

use thiserror::Error;

/// Errors the addition handler can report.
///
/// Parsing failure is the only error family in scope; every variant maps to
/// the same user-visible apology, differing only in the detail shown when
/// debug mode is on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    /// A required form field was not submitted.
    #[error("missing form field '{name}'")]
    MissingField { name: &'static str },

    /// A form field was present but not a base-10 signed integer.
    #[error("form field '{name}' is not an integer: {value:?}")]
    InvalidInteger { name: &'static str, value: String },

    /// The sum does not fit in a 64-bit signed integer.
    #[error("sum of {lhs} and {rhs} overflows a 64-bit integer")]
    Overflow { lhs: i64, rhs: i64 },
}

/// Result type for handler operations.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Errors that can occur while decoding the CGI request environment.
#[derive(Debug, Error)]
pub enum CgiError {
    /// CONTENT_LENGTH was present but not a non-negative integer.
    #[error("invalid CONTENT_LENGTH: {0:?}")]
    InvalidContentLength(String),

    /// Reading the request body from stdin failed.
    #[error("failed to read request body: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
