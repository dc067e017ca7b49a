use serde_json::Value;

use common::prelude::{CallError, OperationDescriptor};

mod client;
mod error;

pub use client::ApiClient;
pub use error::ClientError;

/// Header naming the operation being called, e.g. `RoomService.CreateRoom`
pub const TARGET_HEADER: &str = "x-target";
pub const REGION_HEADER: &str = "x-region";
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// Something that can carry one operation's request to the service.
///
/// Implementations own connection reuse, timeouts and any retry policy;
/// callers issue exactly one `send` per invocation.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        descriptor: &'static OperationDescriptor,
        body: Value,
    ) -> Result<Value, CallError>;
}
