use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use common::prelude::{build_info, CallError, OperationDescriptor};

use super::error::ClientError;
use super::{Transport, REGION_HEADER, SESSION_TOKEN_HEADER, TARGET_HEADER};
use crate::config::{Config, Credentials};

/// HTTP client for the service's JSON protocol.
///
/// Every operation is a `POST` of the request document to the endpoint,
/// addressed by the target header.
#[derive(Debug, Clone)]
pub struct ApiClient {
    endpoint: Url,
    credentials: Option<Credentials>,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(region) = &config.region {
            default_headers.insert(REGION_HEADER, HeaderValue::from_str(region)?);
        }

        let client = Client::builder()
            .default_headers(default_headers)
            .user_agent(build_info().user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            credentials: config.credentials.clone(),
            client,
        })
    }

    fn classify(&self, err: reqwest::Error) -> CallError {
        if err.is_connect() {
            CallError::Unreachable {
                endpoint: self.endpoint.to_string(),
                source: Box::new(err),
            }
        } else {
            CallError::Transport(Box::new(err))
        }
    }
}

#[async_trait::async_trait]
impl Transport for ApiClient {
    async fn send(
        &self,
        descriptor: &'static OperationDescriptor,
        body: Value,
    ) -> Result<Value, CallError> {
        let target = descriptor.target();
        tracing::debug!(%target, endpoint = %self.endpoint, "sending request");

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(TARGET_HEADER, &target)
            .json(&body);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.access_key_id,
                Some(&credentials.secret_access_key),
            );
            if let Some(token) = &credentials.session_token {
                request = request.header(SESSION_TOKEN_HEADER, token);
            }
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| self.classify(e))?;
        tracing::debug!(%target, status = status.as_u16(), "received response");

        if status.is_success() {
            decode_body(descriptor, &text)
        } else {
            Err(service_error(status.as_u16(), &text))
        }
    }
}

fn decode_body(descriptor: &OperationDescriptor, text: &str) -> Result<Value, CallError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(text).map_err(|source| CallError::Decode {
        response_type: descriptor.response_type,
        source,
    })
}

#[derive(Debug, Deserialize)]
struct ErrorDocument {
    #[serde(rename = "__type")]
    kind: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Maps a non-2xx body to a service error, tolerating bodies that are not error documents.
fn service_error(status: u16, text: &str) -> CallError {
    let document = serde_json::from_str::<ErrorDocument>(text).ok();
    let code = document
        .as_ref()
        .and_then(|d| d.kind.as_deref())
        .map(|kind| kind.rsplit('#').next().unwrap_or(kind).to_string())
        .unwrap_or_else(|| "Unknown".to_string());
    let message = document
        .and_then(|d| d.message)
        .unwrap_or_else(|| text.trim().to_string());

    CallError::Service {
        status,
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::room::GetRoom;
    use crate::api::Operation;
    use serde_json::json;

    #[test]
    fn test_service_error_strips_prefix() {
        let err = service_error(
            404,
            r#"{"__type":"com.rooms#NotFoundException","message":"room not found"}"#,
        );
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            "NotFoundException: room not found (HTTP 404)"
        );
    }

    #[test]
    fn test_service_error_capitalized_message() {
        let err = service_error(400, r#"{"__type":"BadRequestException","Message":"bad"}"#);
        assert_eq!(err.code(), Some("BadRequestException"));
        assert!(err.to_string().starts_with("BadRequestException: bad"));
    }

    #[test]
    fn test_service_error_plain_text_body() {
        let err = service_error(503, "  upstream unavailable\n");
        assert_eq!(err.code(), Some("Unknown"));
        assert_eq!(err.to_string(), "Unknown: upstream unavailable (HTTP 503)");
    }

    #[test]
    fn test_decode_empty_body() {
        let value = decode_body(GetRoom::DESCRIPTOR, "").unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_decode_invalid_body() {
        let err = decode_body(GetRoom::DESCRIPTOR, "<html>").unwrap_err();
        assert!(matches!(
            err,
            CallError::Decode {
                response_type: "GetRoomResponse",
                ..
            }
        ));
    }

    #[test]
    fn test_new_rejects_bad_region_header() {
        let endpoint = Url::parse("http://localhost:1").unwrap();
        let config = Config::new(endpoint).with_region("bad\nregion");
        assert!(matches!(ApiClient::new(&config), Err(ClientError::InvalidHeader(_))));
    }
}
