//! Runtime configuration for the fetch client.
//!
//! # Design
//! Configuration is populated once at application start by an external
//! mechanism and read-only afterwards. The JSON shape mirrors the deployed
//! config document — a `public` subsection holds everything safe to expose
//! to clients, keyed in camelCase (`{"public":{"baseUrl":"..."}}`). The
//! accessors do not validate that the base URL is well-formed; a bad value
//! surfaces when the first request is dispatched.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Environment variable consulted by [`RuntimeConfig::from_env`].
pub const PUBLIC_BASE_URL_VAR: &str = "PUBLIC_BASE_URL";

/// Client-visible subset of the runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub base_url: String,
}

/// Process-wide runtime configuration, split into public and (future)
/// private subsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub public: PublicConfig,
}

impl RuntimeConfig {
    /// Build a configuration directly from a base URL. Useful for tests and
    /// for hosts that resolve configuration themselves.
    pub fn new(base_url: &str) -> Self {
        Self {
            public: PublicConfig {
                base_url: base_url.to_string(),
            },
        }
    }

    /// Parse a runtime configuration document from JSON.
    pub fn from_json(raw: &str) -> Result<Self, FetchError> {
        serde_json::from_str(raw).map_err(|e| FetchError::InvalidConfig(e.to_string()))
    }

    /// Read the configuration from the process environment
    /// (`PUBLIC_BASE_URL`).
    pub fn from_env() -> Result<Self, FetchError> {
        let base_url = std::env::var(PUBLIC_BASE_URL_VAR)
            .map_err(|_| FetchError::MissingConfig(PUBLIC_BASE_URL_VAR.to_string()))?;
        Ok(Self::new(&base_url))
    }
}
