pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why a single remote call did not produce a response.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The service answered with an error document.
    #[error("{code}: {message} (HTTP {status})")]
    Service {
        status: u16,
        code: String,
        message: String,
    },
    /// The endpoint could not be reached at all (name resolution, refused connection).
    #[error("could not reach {endpoint}: {source}")]
    Unreachable {
        endpoint: String,
        #[source]
        source: BoxError,
    },
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
    #[error("could not decode {response_type}: {source}")]
    Decode {
        response_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CallError {
    /// Service error code, if the service produced one.
    pub fn code(&self) -> Option<&str> {
        match self {
            CallError::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CallError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
