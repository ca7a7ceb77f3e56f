//! Observer hooks for the request lifecycle.
//!
//! # Design
//! Hooks observe, they never steer: an observer receives each event by
//! reference, produces no value the client consumes, and cannot mutate the
//! request or swallow a failure. For a single request `on_request` fires
//! strictly before dispatch and `on_request_error` fires only after that
//! request's failure is detected; no ordering holds across concurrent
//! requests, so observers must tolerate interleaved calls.

use crate::error::FetchError;
use crate::http::HttpRequest;

/// Event passed to [`FetchObserver::on_request`] before a request is
/// dispatched. Ephemeral; not persisted by the client.
#[derive(Debug)]
pub struct RequestEvent<'a> {
    pub request: &'a HttpRequest,
}

/// Event passed to [`FetchObserver::on_request_error`] when a request fails
/// at the transport level.
#[derive(Debug)]
pub struct RequestErrorEvent<'a> {
    pub request: &'a HttpRequest,
    pub error: &'a FetchError,
}

/// Lifecycle observer attached to a fetch client at creation time.
///
/// `on_request_error` defaults to a no-op so observers that only care about
/// outgoing traffic implement a single method.
pub trait FetchObserver: Send + Sync {
    /// Called synchronously with every outgoing request, before dispatch.
    fn on_request(&self, event: &RequestEvent<'_>);

    /// Called when a request fails below the HTTP layer. The failure still
    /// propagates to the original caller after this returns.
    fn on_request_error(&self, event: &RequestErrorEvent<'_>) {
        let _ = event;
    }
}

/// Production observer: writes every event to the diagnostic log.
#[derive(Debug, Default)]
pub struct LogObserver;

impl FetchObserver for LogObserver {
    fn on_request(&self, event: &RequestEvent<'_>) {
        log::debug!("fetch: {} {}", event.request.method, event.request.url);
    }

    fn on_request_error(&self, event: &RequestErrorEvent<'_>) {
        log::error!(
            "fetch: {} {} failed: {}",
            event.request.method,
            event.request.url,
            event.error
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::http::HttpMethod;

    struct RequestOnlyObserver {
        seen: AtomicUsize,
    }

    impl FetchObserver for RequestOnlyObserver {
        fn on_request(&self, _event: &RequestEvent<'_>) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "https://api.example.com/users".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[test]
    fn error_hook_defaults_to_noop() {
        let observer = RequestOnlyObserver {
            seen: AtomicUsize::new(0),
        };
        let req = request();
        let error = FetchError::Transport("boom".to_string());

        observer.on_request(&RequestEvent { request: &req });
        observer.on_request_error(&RequestErrorEvent {
            request: &req,
            error: &error,
        });

        assert_eq!(observer.seen.load(Ordering::SeqCst), 1);
    }
}
