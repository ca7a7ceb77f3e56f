//! Configured fetch client for application startup.
//!
//! # Overview
//! At startup the host reads its runtime configuration, derives an HTTP
//! client bound to the configured public base URL with request/error
//! observer hooks attached, and installs it on the application context for
//! the rest of the application to use.
//!
//! # Design
//! - `FetchClient` is immutable once created — base URL and hooks are fixed
//!   for the application's lifetime.
//! - I/O goes through the `Transport` trait; production uses ureq, tests
//!   substitute doubles at that seam.
//! - Observer hooks are pure side effects (diagnostic logging); they never
//!   mutate requests or swallow failures.
//! - Global framework state (runtime config, the `$fetch` handle) is
//!   reproduced as explicit values the caller owns: `RuntimeConfig` in,
//!   `AppContext` holding the installed client out.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observer;
pub mod transport;

pub use app::{init_fetch, AppContext};
pub use client::{FetchClient, FetchOptions};
pub use config::{PublicConfig, RuntimeConfig};
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use observer::{FetchObserver, LogObserver, RequestErrorEvent, RequestEvent};
pub use transport::{Transport, UreqTransport};
