//! Error types for the fetch client.
//!
//! # Design
//! The client itself never retries, transforms, or suppresses failures; the
//! variants here only name where a failure came from. `Transport` covers
//! connection-level problems (connect, DNS, I/O) — non-2xx responses are
//! returned as data, not errors, so they have no variant.

use std::fmt;

/// Errors surfaced by configuration loading and request dispatch.
#[derive(Debug)]
pub enum FetchError {
    /// A required configuration key was absent.
    MissingConfig(String),

    /// The configuration source was present but could not be parsed.
    InvalidConfig(String),

    /// The request never completed; the transport failed below the HTTP
    /// layer. Propagated to the caller unmodified after the error hook runs.
    Transport(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::MissingConfig(key) => {
                write!(f, "missing configuration key: {key}")
            }
            FetchError::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            FetchError::Transport(msg) => {
                write!(f, "transport failure: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
