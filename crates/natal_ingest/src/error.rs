//! Error types for position providers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a position source or the chain configuration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProviderError {
    /// Transport-level failure (connect, DNS, body read).
    Http(String),
    /// Non-success HTTP status.
    Status(u16),
    /// Response did not match the expected shape.
    Parse(String),
    /// Invalid ingestion configuration.
    InvalidConfig(&'static str),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "http error: {msg}"),
            Self::Status(code) => write!(f, "http status {code}"),
            Self::Parse(msg) => write!(f, "response parse error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ProviderError {}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Http(e.to_string()),
        }
    }
}
