use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use http::{HeaderMap, StatusCode};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use url::Url;
use uuid::Uuid;

use crate::client::{REGION_HEADER, SESSION_TOKEN_HEADER, TARGET_HEADER};

/// One request as the stub service saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub target: Option<String>,
    pub region: Option<String>,
    pub authorization: Option<String>,
    pub session_token: Option<String>,
    pub content_type: Option<String>,
    pub user_agent: Option<String>,
    pub body: Value,
}

impl CapturedRequest {
    /// Operation name taken from the target header.
    pub fn operation(&self) -> Option<&str> {
        self.target.as_deref().and_then(|t| t.rsplit('.').next())
    }
}

#[derive(Debug, Clone)]
struct CannedReply {
    status: StatusCode,
    body: String,
}

#[derive(Debug, Default)]
struct ServerState {
    replies: Mutex<HashMap<String, CannedReply>>,
    requests: Mutex<Vec<CapturedRequest>>,
}

/// Loopback HTTP server speaking the service's JSON protocol.
///
/// Operations without a configured reply answer `200 {}`.
pub struct StubServer {
    endpoint: Url,
    state: Arc<ServerState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(ServerState::default());
        let router = Router::new()
            .route("/", post(handle))
            .with_state(state.clone())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let endpoint = Url::parse(&format!("http://{addr}/"))?;
        tracing::debug!(%addr, "stub service listening");

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(err) = result {
                tracing::error!(error = %err, "stub service failed");
            }
        });

        Ok(Self {
            endpoint,
            state,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn reply_json(&self, operation: &str, body: Value) {
        self.reply_raw(operation, 200, &body.to_string());
    }

    /// Answers `operation` with an error document, `__type` qualified the way
    /// the service qualifies it.
    pub fn reply_error(&self, operation: &str, status: u16, code: &str, message: &str) {
        let body = json!({
            "__type": format!("com.roomservice#{code}"),
            "message": message,
        });
        self.reply_raw(operation, status, &body.to_string());
    }

    pub fn reply_raw(&self, operation: &str, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.state.replies.lock().insert(
            operation.to_string(),
            CannedReply {
                status,
                body: body.to_string(),
            },
        );
    }

    /// Answers `operation` with a freshly generated arn under `field` and returns it.
    pub fn reply_created(&self, operation: &str, field: &str) -> String {
        let arn = format!("arn:roomservice:test:{}", Uuid::new_v4());
        self.reply_json(operation, json!({ field: arn }));
        arn
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().clone()
    }

    pub async fn stop(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await?;
        }
        Ok(())
    }

    /// An endpoint on loopback with nothing listening.
    pub async fn closed_endpoint() -> anyhow::Result<Url> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        drop(listener);
        Ok(Url::parse(&format!("http://{addr}/"))?)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn handle(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let captured = CapturedRequest {
        target: header(TARGET_HEADER),
        region: header(REGION_HEADER),
        authorization: header("authorization"),
        session_token: header(SESSION_TOKEN_HEADER),
        content_type: header("content-type"),
        user_agent: header("user-agent"),
        body: serde_json::from_slice(&body).unwrap_or(Value::Null),
    };
    let reply = captured
        .operation()
        .and_then(|op| state.replies.lock().get(op).cloned());
    state.requests.lock().push(captured);

    match reply {
        Some(reply) => (reply.status, reply.body).into_response(),
        None => (StatusCode::OK, "{}").into_response(),
    }
}
