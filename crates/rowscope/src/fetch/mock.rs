//! Mock transport and sleeper for testing.

use std::sync::Mutex;
use std::time::Duration;

use crate::error::{Result, RowscopeError};

use super::transport::{HttpResponse, Sleeper, Transport};

/// One scripted transport outcome.
enum Scripted {
    Respond(HttpResponse),
    NetworkError(String),
}

/// Mock transport that replays a scripted sequence of responses and records
/// every requested URL.
///
/// Responses are consumed in order; requests past the end of the script fail
/// with a network error so runaway loops surface in tests instead of hanging.
pub struct MockTransport {
    script: Mutex<Vec<Scripted>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a transport with an empty script.
    pub fn new() -> Self {
        Self {
            script: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push(Scripted::Respond(HttpResponse::new(status, body)));
        self
    }

    /// Queue a successful JSON response.
    pub fn respond_json(self, body: &serde_json::Value) -> Self {
        self.respond(200, body.to_string())
    }

    /// Queue a network-level failure.
    pub fn fail_network(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push(Scripted::NetworkError(message.into()));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests issued so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(url.to_string());

        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(RowscopeError::Network(format!(
                "no scripted response for request: {}",
                url
            )));
        }

        match script.remove(0) {
            Scripted::Respond(response) => Ok(response),
            Scripted::NetworkError(message) => Err(RowscopeError::Network(message)),
        }
    }
}

/// Sleeper that records requested delays instead of sleeping.
#[derive(Default)]
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    /// Create a sleeper with no recorded delays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }

    /// Sum of all requested delays.
    pub fn total_delay(&self) -> Duration {
        self.delays.lock().unwrap().iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}
