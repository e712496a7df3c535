//! HTTP transport for the Bootcamp API client.
//!
//! # Design
//! Requests and responses are plain data. `BootcampClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; a `Transport` performs the single round-trip in between. The
//! default `UreqTransport` is blocking and bounded by a fixed timeout.

use std::borrow::Cow;
use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;

/// Upper bound on a single request, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest response body `UreqTransport` reads by default (1 GiB).
///
/// Collections always arrive whole, so this sits far above ureq's own
/// 10 MiB default.
pub const MAX_BODY_SIZE: u64 = 1 << 30;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes. Whether they form valid JSON (or valid
/// UTF-8) is decided when parsing, not by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, with invalid UTF-8 replaced. For messages and logs.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Executes one `HttpRequest`.
///
/// Implementations must return non-2xx responses as data, not as `Err`.
/// `Err` is reserved for failures where no response was received.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            body_limit: MAX_BODY_SIZE,
        }
    }

    /// Override the response body limit, in bytes.
    pub fn with_body_limit(mut self, limit: u64) -> Self {
        self.body_limit = limit;
        self
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;
        let agent = &self.agent;

        let result = match method {
            HttpMethod::Get => with_headers(agent.get(&url), &headers).call(),
            HttpMethod::Delete => with_headers(agent.delete(&url), &headers).call(),
            HttpMethod::Post => send(with_headers(agent.post(&url), &headers), body),
            HttpMethod::Put => send(with_headers(agent.put(&url), &headers), body),
        };

        let mut response = result
            .map_err(|e| ApiError::Transport(format!("{} {url}: {e}", method.as_str())))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_vec()
            .map_err(|e| ApiError::Transport(format!("reading body of {url}: {e}")))?;

        debug!(method = method.as_str(), %url, status, bytes = body.len(), "request completed");
        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: ureq::RequestBuilder<ureq::typestate::WithBody>,
    body: Option<String>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
