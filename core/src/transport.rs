//! Transport seam between the fetch client and the network.
//!
//! # Design
//! `Transport` is the shared default client a configured [`FetchClient`]
//! derives from. Implementations execute one request synchronously and
//! return the response as plain data. Non-2xx statuses are responses, not
//! errors; only failures below the HTTP layer (connect, DNS, I/O) come back
//! as `Err`. Tests substitute doubles at this seam.
//!
//! [`FetchClient`]: crate::client::FetchClient

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip.
pub trait Transport: Send + Sync {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Default transport backed by a `ureq::Agent`.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses are
/// returned as data rather than `Err`, leaving status interpretation to the
/// caller.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
            HttpMethod::Delete => self.agent.delete(&request.url),
            HttpMethod::Post | HttpMethod::Put => {
                return self.send_with_body(request);
            }
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let response = builder
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_response(response)
    }
}

impl UreqTransport {
    fn send_with_body(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut builder = match request.method {
            HttpMethod::Post => self.agent.post(&request.url),
            HttpMethod::Put => self.agent.put(&request.url),
            _ => unreachable!("send_with_body is only called for POST and PUT"),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let response = match &request.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        }
        .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_response(response)
    }
}

fn read_response(mut response: ureq::http::Response<ureq::Body>) -> Result<HttpResponse, FetchError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
