//! The configured fetch client.
//!
//! # Design
//! `FetchClient` is derived once from a shared default transport via
//! [`FetchClient::create`] and is immutable afterwards: the base URL cannot
//! change and no API exists to swap hooks on a live client. It holds no
//! mutable state between calls, so a single instance behind an `Arc` serves
//! the whole application, including concurrent requests.
//!
//! Each call resolves the URL against the base, fires the request hook,
//! dispatches through the transport, and on failure fires the error hook
//! before propagating the same error to the caller unmodified.

use std::sync::Arc;

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::observer::{FetchObserver, RequestErrorEvent, RequestEvent};
use crate::transport::Transport;

/// Creation-time options for a derived client, mirroring the shape the host
/// application's startup code supplies.
pub struct FetchOptions {
    pub base_url: String,
    pub observer: Option<Arc<dyn FetchObserver>>,
}

/// HTTP client bound to a base URL, with lifecycle hooks attached.
pub struct FetchClient {
    base_url: String,
    observer: Option<Arc<dyn FetchObserver>>,
    transport: Arc<dyn Transport>,
}

impl FetchClient {
    /// Derive a configured client from a transport.
    ///
    /// A trailing `/` on the base URL is stripped so relative paths join
    /// with exactly one separator.
    pub fn create(options: FetchOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: options.base_url.trim_end_matches('/').to_string(),
            observer: options.observer,
            transport,
        }
    }

    /// The base URL this client was created with, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request path against the base URL. Absolute URLs pass
    /// through untouched.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Issue a request through the configured transport.
    ///
    /// The request hook fires strictly before dispatch; the error hook fires
    /// only if the transport fails, after which the same error is returned.
    pub fn fetch(
        &self,
        method: HttpMethod,
        path: &str,
        headers: Vec<(String, String)>,
        body: Option<String>,
    ) -> Result<HttpResponse, FetchError> {
        let request = HttpRequest {
            method,
            url: self.resolve_url(path),
            headers,
            body,
        };

        if let Some(observer) = &self.observer {
            observer.on_request(&RequestEvent { request: &request });
        }

        match self.transport.send(&request) {
            Ok(response) => Ok(response),
            Err(error) => {
                if let Some(observer) = &self.observer {
                    observer.on_request_error(&RequestErrorEvent {
                        request: &request,
                        error: &error,
                    });
                }
                Err(error)
            }
        }
    }

    /// Convenience wrapper for a body-less GET.
    pub fn get(&self, path: &str) -> Result<HttpResponse, FetchError> {
        self.fetch(HttpMethod::Get, path, Vec::new(), None)
    }
}
