use serde_json::Value;

use crate::error::CallError;

/// Result of one adapter invocation, handed to whatever renders it.
#[derive(Debug)]
pub struct OutputEnvelope {
    pub operation: &'static str,
    /// Non-fatal problems noticed while binding (missing required parameters)
    pub warnings: Vec<String>,
    pub outcome: Outcome,
}

#[derive(Debug)]
pub enum Outcome {
    Success {
        /// The selected output; `None` when the selection yields nothing
        payload: Option<Value>,
        /// Full decoded response, kept for introspection
        response: Value,
    },
    Failure(CallError),
}

impl OutputEnvelope {
    pub fn success(
        operation: &'static str,
        warnings: Vec<String>,
        payload: Option<Value>,
        response: Value,
    ) -> Self {
        Self {
            operation,
            warnings,
            outcome: Outcome::Success { payload, response },
        }
    }

    pub fn failure(operation: &'static str, warnings: Vec<String>, error: CallError) -> Self {
        Self {
            operation,
            warnings,
            outcome: Outcome::Failure(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    pub fn payload(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success { payload, .. } => payload.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    pub fn response(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success { response, .. } => Some(response),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CallError> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    /// Splits the envelope into the host's result and error channels.
    pub fn into_result(self) -> Result<Option<Value>, CallError> {
        match self.outcome {
            Outcome::Success { payload, .. } => Ok(payload),
            Outcome::Failure(err) => Err(err),
        }
    }
}
