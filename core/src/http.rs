//! Plain-data HTTP request and response types.
//!
//! # Design
//! Requests and responses are described as plain data so they can cross the
//! transport seam unchanged: the client builds an `HttpRequest`, observer
//! hooks receive it as the request descriptor, and the transport turns it
//! into an `HttpResponse`. All fields use owned types (`String`, `Vec`) so
//! event values can outlive the call that produced them if an observer
//! chooses to clone them.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// An outgoing HTTP request described as plain data.
///
/// The `url` is always fully resolved (base URL already applied) by the time
/// a request reaches the observer hooks or the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Non-success status codes are returned as data, not errors; interpreting
/// the status is the caller's business.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
