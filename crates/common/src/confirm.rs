use std::fmt;

use serde_json::Value;

use crate::descriptor::{ConfirmImpact, OperationDescriptor};

/// The question put to the caller before a mutating call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub command: String,
    pub operation: &'static str,
    pub target: String,
    pub impact: ConfirmImpact,
}

impl ConfirmPrompt {
    /// Builds the prompt, naming the target from the serialized parameter record.
    pub fn new(descriptor: &OperationDescriptor, params: &Value) -> Self {
        let target = descriptor
            .target_parameter
            .and_then(|name| params.get(name))
            .and_then(render_target)
            .unwrap_or_else(|| "(none)".to_string());

        Self {
            command: descriptor.command_name(),
            operation: descriptor.operation,
            target,
            impact: descriptor.confirm_impact,
        }
    }
}

fn render_target(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) if items.is_empty() => None,
        other => Some(other.to_string()),
    }
}

impl fmt::Display for ConfirmPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Performing the operation \"{} ({})\" on target \"{}\".",
            self.command, self.operation, self.target
        )
    }
}

/// Source of yes/no decisions for mutating operations.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// Approves everything; what `--force` means.
#[derive(Debug, Clone, Copy, Default)]
pub struct Force;

impl Confirm for Force {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        true
    }
}

/// Declines everything; used where nobody can be asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{ParamKind, ParameterBinding};
    use crate::descriptor::{DefaultOutput, Verb};
    use serde_json::json;

    const UNTAG: &OperationDescriptor = &OperationDescriptor {
        service: "RoomService",
        operation: "UntagResource",
        verb: Verb::Remove,
        noun: "ResourceTag",
        request_type: "UntagResourceRequest",
        response_type: "UntagResourceResponse",
        parameters: &[
            ParameterBinding::new("Arn", ParamKind::String).required(),
            ParameterBinding::new("TagKey", ParamKind::StringList).remote("TagKeys"),
        ],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::High,
        target_parameter: Some("Arn"),
        pass_through: Some("Arn"),
    };

    #[test]
    fn test_prompt_format() {
        let prompt = ConfirmPrompt::new(UNTAG, &json!({ "Arn": "arn:room/1", "TagKey": ["a"] }));

        assert_eq!(
            prompt.to_string(),
            "Performing the operation \"Remove-ResourceTag (UntagResource)\" on target \"arn:room/1\"."
        );
        assert_eq!(prompt.impact, ConfirmImpact::High);
    }

    #[test]
    fn test_prompt_without_target_value() {
        let prompt = ConfirmPrompt::new(UNTAG, &json!({ "Arn": null }));
        assert_eq!(prompt.target, "(none)");
    }

    #[test]
    fn test_force_and_decline() {
        let prompt = ConfirmPrompt::new(UNTAG, &json!({}));
        assert!(Force.confirm(&prompt));
        assert!(!Decline.confirm(&prompt));
    }
}
