//! Application context and startup initialization.
//!
//! # Design
//! The host framework's global application handle is reproduced as an
//! explicit [`AppContext`] the caller owns, rather than ambient global
//! state. [`init_fetch`] is the one-shot startup step: it reads the public
//! base URL from runtime configuration, derives a client over the default
//! transport with the logging observer attached, and installs it under the
//! context's fetch handle. Installation replaces any previous client, so
//! re-running initialization never accumulates duplicate hooks.
//!
//! Installation happens once before concurrent use begins, so the context
//! needs no interior locking; share the installed client by cloning its
//! `Arc`.

use std::sync::Arc;

use crate::client::{FetchClient, FetchOptions};
use crate::config::RuntimeConfig;
use crate::observer::LogObserver;
use crate::transport::UreqTransport;

/// Per-application shared context holding the installed fetch client.
#[derive(Default)]
pub struct AppContext {
    fetch: Option<Arc<FetchClient>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a client under the fetch handle, replacing any previous one.
    /// Returns the installed handle for immediate use.
    pub fn install_fetch(&mut self, client: FetchClient) -> Arc<FetchClient> {
        let client = Arc::new(client);
        self.fetch = Some(client.clone());
        client
    }

    /// The installed fetch client, if initialization has run.
    pub fn fetch(&self) -> Option<&Arc<FetchClient>> {
        self.fetch.as_ref()
    }
}

/// Startup plugin: derive a configured client from the runtime configuration
/// and install it on the application context.
///
/// The base URL is taken as-is from `config.public.base_url`; a malformed
/// value is not caught here and surfaces on first dispatch.
pub fn init_fetch(app: &mut AppContext, config: &RuntimeConfig) -> Arc<FetchClient> {
    let client = FetchClient::create(
        FetchOptions {
            base_url: config.public.base_url.clone(),
            observer: Some(Arc::new(LogObserver)),
        },
        Arc::new(UreqTransport::default()),
    );
    app.install_fetch(client)
}
