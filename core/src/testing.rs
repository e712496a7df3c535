//! Testing utilities for code built on `ApiClient`.
//!
//! `ScriptedTransport` replays canned responses in order and records every
//! request it was given, so reconcilers can be exercised without a server.
//!
//! # Example
//!
//! ```
//! use bootcamp_core::testing::ScriptedTransport;
//! use bootcamp_core::ApiClient;
//!
//! let transport = ScriptedTransport::new()
//!     .respond(200, r#"[{"id":"UCS24","name":"Ryan","email":"ryan@ferrets.com"}]"#);
//! let api = ApiClient::with_transport("http://localhost:8080", transport).unwrap();
//!
//! let engineers = api.list_engineers().unwrap();
//! assert_eq!(engineers[0].id, "UCS24");
//! assert_eq!(api.transport().requests()[0].url, "http://localhost:8080/engineers");
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};

/// A `Transport` that answers from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<HttpResponse, String>>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        lock(&self.script).push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    /// Queue a failure where no response arrives (refused, timed out).
    pub fn fail(self, reason: &str) -> Self {
        lock(&self.script).push_back(Err(reason.to_string()));
        self
    }

    /// Requests executed so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.seen).clone()
    }

    /// Number of queued responses not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.clone();
        lock(&self.seen).push(request);
        match lock(&self.script).pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(reason)) => Err(ApiError::Transport(format!("{url}: {reason}"))),
            None => Err(ApiError::Transport(format!("{url}: no scripted response left"))),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
