use std::str::FromStr;

use serde_json::Value;

use crate::descriptor::{DefaultOutput, OperationDescriptor};

/// What a caller asked to see from an invocation.
///
/// Parsed from `--select` (`*`, `^Param`, `Field`) or implied by `--pass-thru`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSelector {
    WholeResponse,
    DefaultField,
    NamedField(String),
    PassThroughParameter(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("--select and --pass-thru cannot be used together; use --select '^<Parameter>' to echo a parameter")]
    ConflictingOptions,
    #[error("empty output selector")]
    Empty,
    #[error("'{field}' is not a member of the {response_type} response of {command}")]
    UnknownField {
        command: String,
        response_type: &'static str,
        field: String,
    },
    #[error("'{parameter}' is not a parameter of {command}")]
    UnknownParameter { command: String, parameter: String },
    #[error("{command} has no parameter to pass through")]
    NoPassThrough { command: String },
}

impl FromStr for OutputSelector {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(SelectError::Empty);
        }
        if s == "*" {
            return Ok(OutputSelector::WholeResponse);
        }
        match s.strip_prefix('^') {
            Some("") => Err(SelectError::Empty),
            Some(parameter) => Ok(OutputSelector::PassThroughParameter(parameter.to_string())),
            None => Ok(OutputSelector::NamedField(s.to_string())),
        }
    }
}

impl OutputSelector {
    /// Combines the two output conventions a caller can use.
    pub fn from_options(
        select: Option<&str>,
        pass_thru: bool,
        descriptor: &OperationDescriptor,
    ) -> Result<Self, SelectError> {
        match (select, pass_thru) {
            (Some(_), true) => Err(SelectError::ConflictingOptions),
            (Some(expr), false) => expr.parse(),
            (None, true) => descriptor
                .pass_through
                .map(|p| OutputSelector::PassThroughParameter(p.to_string()))
                .ok_or_else(|| SelectError::NoPassThrough {
                    command: descriptor.command_name(),
                }),
            (None, false) => Ok(OutputSelector::DefaultField),
        }
    }

    /// Checks the selector against the operation's shape and fixes it into a [`Selection`].
    ///
    /// `params` is the serialized parameter record; pass-through values are
    /// captured from it here, so the selection no longer depends on it.
    pub fn resolve(
        &self,
        descriptor: &OperationDescriptor,
        params: &Value,
    ) -> Result<Selection, SelectError> {
        match self {
            OutputSelector::WholeResponse => Ok(Selection::Whole),
            OutputSelector::DefaultField => Ok(match descriptor.default_output {
                DefaultOutput::Field(field) => Selection::Field(field),
                DefaultOutput::WholeResponse => Selection::Whole,
                DefaultOutput::Nothing => Selection::Nothing,
            }),
            OutputSelector::NamedField(name) => descriptor
                .response_field(name)
                .map(Selection::Field)
                .ok_or_else(|| SelectError::UnknownField {
                    command: descriptor.command_name(),
                    response_type: descriptor.response_type,
                    field: name.clone(),
                }),
            OutputSelector::PassThroughParameter(name) => {
                let binding = descriptor
                    .parameter(name)
                    .ok_or_else(|| SelectError::UnknownParameter {
                        command: descriptor.command_name(),
                        parameter: name.clone(),
                    })?;
                let value = params.get(binding.name).cloned().unwrap_or(Value::Null);
                Ok(Selection::Value(value))
            }
        }
    }
}

/// A resolved output selection: a plain function from response to output.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Whole,
    Field(&'static str),
    /// A value fixed at bind time (pass-through)
    Value(Value),
    Nothing,
}

impl Selection {
    pub fn apply(&self, response: &Value) -> Option<Value> {
        match self {
            Selection::Whole => Some(response.clone()),
            Selection::Field(field) => response.get(*field).cloned(),
            Selection::Value(value) => Some(value.clone()),
            Selection::Nothing => None,
        }
    }
}
