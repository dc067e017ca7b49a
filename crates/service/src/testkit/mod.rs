//! Test doubles for code that talks to the service.
//!
//! [`StubTransport`] answers every call with one canned reply and records
//! what it was sent. With the `testkit` feature, [`StubServer`] serves the
//! same protocol over loopback HTTP for exercising the real client.

use parking_lot::Mutex;
use serde_json::Value;

use common::prelude::{CallError, OperationDescriptor};

use crate::client::Transport;

#[cfg(feature = "testkit")]
mod server;

#[cfg(feature = "testkit")]
pub use server::{CapturedRequest, StubServer};

/// What a [`StubTransport`] answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Service {
        status: u16,
        code: String,
        message: String,
    },
    /// Fail as if nothing listened at `endpoint`
    Unreachable { endpoint: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub target: String,
    pub body: Value,
}

#[derive(Debug)]
pub struct StubTransport {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(body: Value) -> Self {
        Self::new(Reply::Json(body))
    }

    pub fn failing(status: u16, code: &str, message: &str) -> Self {
        Self::new(Reply::Service {
            status,
            code: code.to_string(),
            message: message.to_string(),
        })
    }

    pub fn unreachable(endpoint: &str) -> Self {
        Self::new(Reply::Unreachable {
            endpoint: endpoint.to_string(),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn last_body(&self) -> Option<Value> {
        self.calls.lock().last().map(|call| call.body.clone())
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        descriptor: &'static OperationDescriptor,
        body: Value,
    ) -> Result<Value, CallError> {
        self.calls.lock().push(RecordedCall {
            operation: descriptor.operation,
            target: descriptor.target(),
            body,
        });

        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Service {
                status,
                code,
                message,
            } => Err(CallError::Service {
                status: *status,
                code: code.clone(),
                message: message.clone(),
            }),
            Reply::Unreachable { endpoint } => Err(CallError::Unreachable {
                endpoint: endpoint.clone(),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )),
            }),
        }
    }
}
