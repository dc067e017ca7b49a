use std::fmt;

use serde_json::Value;

use crate::binding::ParameterBinding;

/// Verb half of a command identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Add,
    Find,
    Get,
    New,
    Remove,
    Update,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "Add",
            Verb::Find => "Find",
            Verb::Get => "Get",
            Verb::New => "New",
            Verb::Remove => "Remove",
            Verb::Update => "Update",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much damage an operation can do; anything above `None` mutates
/// remote state and must be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfirmImpact {
    None,
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfirmImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfirmImpact::None => "None",
            ConfirmImpact::Low => "Low",
            ConfirmImpact::Medium => "Medium",
            ConfirmImpact::High => "High",
        };
        f.write_str(s)
    }
}

/// What a command emits when the caller does not ask for anything specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultOutput {
    /// A single top-level member of the response
    Field(&'static str),
    WholeResponse,
    /// Operations whose response carries nothing worth printing
    Nothing,
}

/// Static description of one remote operation and the command bound to it.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// Service prefix used when addressing the operation on the wire
    pub service: &'static str,
    pub operation: &'static str,
    pub verb: Verb,
    pub noun: &'static str,
    pub request_type: &'static str,
    pub response_type: &'static str,
    pub parameters: &'static [ParameterBinding],
    /// Top-level members of the response, as named on the wire
    pub response_fields: &'static [&'static str],
    pub default_output: DefaultOutput,
    pub confirm_impact: ConfirmImpact,
    /// Parameter whose value names the target in confirmation prompts
    pub target_parameter: Option<&'static str>,
    /// Parameter echoed back by `--pass-thru`
    pub pass_through: Option<&'static str>,
}

impl OperationDescriptor {
    /// Verb-noun identifier, e.g. `New-Room`.
    pub fn command_name(&self) -> String {
        format!("{}-{}", self.verb, self.noun)
    }

    /// Wire address of the operation, e.g. `RoomService.CreateRoom`.
    pub fn target(&self) -> String {
        format!("{}.{}", self.service, self.operation)
    }

    /// Case-insensitive match against the command name or the operation name.
    pub fn is_named(&self, name: &str) -> bool {
        self.operation.eq_ignore_ascii_case(name) || self.command_name().eq_ignore_ascii_case(name)
    }

    pub fn is_mutating(&self) -> bool {
        self.confirm_impact > ConfirmImpact::None
    }

    /// Looks a parameter up by name or alias.
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterBinding> {
        self.parameters.iter().find(|p| p.matches(name))
    }

    /// Canonical spelling of a response member, if the response has one by that name.
    pub fn response_field(&self, name: &str) -> Option<&'static str> {
        self.response_fields
            .iter()
            .copied()
            .find(|f| f.eq_ignore_ascii_case(name))
    }

    /// Required parameters with no value in the serialized parameter record.
    pub fn missing_required(&self, params: &Value) -> Vec<&'static str> {
        self.parameters
            .iter()
            .filter(|p| p.required && p.is_unset_in(params))
            .map(|p| p.name)
            .collect()
    }
}

impl fmt::Display for OperationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.command_name(), self.operation)
    }
}
