use clap::Args;

use common::prelude::{OperationDescriptor, ParameterBinding};
use service::api::{find_descriptor, DESCRIPTORS};

/// List the available verb-noun commands and the operations they call
#[derive(Args, Debug, Clone, Default)]
pub struct Commands {
    /// Show one command with its parameters, by command or operation name
    #[arg(conflicts_with_all = ["noun", "verb"])]
    pub name: Option<String>,

    /// Only commands for this noun, e.g. Room
    #[arg(long)]
    pub noun: Option<String>,

    /// Only commands with this verb, e.g. Get
    #[arg(long)]
    pub verb: Option<String>,

    /// Also list each command's parameters
    #[arg(long, short = 'd')]
    pub detailed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandsError {
    #[error("no command or operation named '{0}'; run 'roomctl commands' to list them")]
    Unknown(String),
}

impl Commands {
    fn selects(&self, descriptor: &OperationDescriptor) -> bool {
        let matches = |filter: &Option<String>, value: &str| {
            filter
                .as_deref()
                .is_none_or(|f| f.eq_ignore_ascii_case(value))
        };
        matches(&self.noun, descriptor.noun) && matches(&self.verb, descriptor.verb.as_str())
    }

    fn selected(&self) -> Result<Vec<&'static OperationDescriptor>, CommandsError> {
        let Some(name) = &self.name else {
            let selected = DESCRIPTORS.iter().copied().filter(|d| self.selects(d));
            return Ok(selected.collect());
        };

        match find_descriptor(name) {
            Some(descriptor) => Ok(vec![descriptor]),
            None => Err(CommandsError::Unknown(name.clone())),
        }
    }
}

#[async_trait::async_trait]
impl crate::op::Op for Commands {
    type Error = CommandsError;
    type Output = String;

    async fn execute(&self, _ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let selected = self.selected()?;
        let detailed = self.detailed || self.name.is_some();

        let width = selected
            .iter()
            .map(|d| d.command_name().len())
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for descriptor in selected {
            lines.push(format!(
                "{:<width$}  {}",
                descriptor.command_name(),
                descriptor.operation
            ));
            if detailed {
                lines.extend(descriptor.parameters.iter().map(describe_parameter));
            }
        }
        Ok(lines.join("\n"))
    }
}

fn describe_parameter(binding: &ParameterBinding) -> String {
    let mut line = format!("    -{} <{}>", binding.name, binding.kind);
    if binding.required {
        line.push_str(" required");
    }
    if !binding.aliases.is_empty() {
        line.push_str(&format!(" alias: {}", binding.aliases.join(", ")));
    }
    if binding.remote != binding.name {
        line.push_str(&format!(" -> {}", binding.remote));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::{Op, OpContext};
    use crate::render::OutputFormat;
    use service::OutputOptions;

    fn ctx() -> OpContext {
        OpContext::new(
            Default::default(),
            OutputOptions::default(),
            OutputFormat::Text,
        )
    }

    #[tokio::test]
    async fn test_lists_every_command() {
        let output = Commands::default().execute(&ctx()).await.unwrap();
        assert_eq!(output.lines().count(), DESCRIPTORS.len());
        assert!(output.lines().any(|l| l.starts_with("Remove-ResourceTag")));
    }

    #[tokio::test]
    async fn test_filtered_and_detailed() {
        let op = Commands {
            noun: Some("room".into()),
            verb: Some("new".into()),
            detailed: true,
            ..Default::default()
        };
        let output = op.execute(&ctx()).await.unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "New-Room  CreateRoom");
        assert_eq!(lines[1], "    -RoomName <String> required alias: Name");
        assert!(lines.contains(&"    -Tag <Tag[]> -> Tags"));
    }

    #[tokio::test]
    async fn test_filter_matches_any_case() {
        let op = Commands {
            verb: Some("REMOVE".into()),
            ..Default::default()
        };
        let output = op.execute(&ctx()).await.unwrap();

        assert_eq!(output.lines().count(), 3);
        assert!(output.lines().all(|l| l.starts_with("Remove-")));
    }

    #[tokio::test]
    async fn test_single_command_by_name() {
        for name in ["get-profile", "GetProfile"] {
            let op = Commands {
                name: Some(name.into()),
                ..Default::default()
            };
            let output = op.execute(&ctx()).await.unwrap();
            let lines: Vec<&str> = output.lines().collect();

            assert_eq!(lines[0], "Get-Profile  GetProfile");
            assert_eq!(lines[1], "    -ProfileArn <String> alias: Profile");
            assert_eq!(lines.len(), 2);
        }
    }

    #[tokio::test]
    async fn test_unknown_name() {
        let op = Commands {
            name: Some("Reboot-Room".into()),
            ..Default::default()
        };
        let err = op.execute(&ctx()).await.unwrap_err();
        let CommandsError::Unknown(name) = err;
        assert_eq!(name, "Reboot-Room");
    }
}
