use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

/// Attaches tags to any taggable resource.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct TagResource {
    /// Resource to tag
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "resource-arn"))]
    pub arn: Option<String>,

    /// Tag to apply, as KEY=VALUE (repeatable)
    #[cfg_attr(feature = "clap", arg(long = "tag", value_name = "KEY=VALUE"))]
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceRequest {
    pub arn: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResourceResponse {}

impl Operation for TagResource {
    type Request = TagResourceRequest;
    type Response = TagResourceResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "TagResource",
        verb: Verb::Add,
        noun: NOUN,
        request_type: "TagResourceRequest",
        response_type: "TagResourceResponse",
        parameters: &[
            ParameterBinding::new("Arn", ParamKind::String)
                .aliases(&["ResourceArn"])
                .required(),
            ParameterBinding::new("Tag", ParamKind::TagList)
                .remote("Tags")
                .required(),
        ],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::Medium,
        target_parameter: Some("Arn"),
        pass_through: Some("Arn"),
    };

    fn build_request(&self) -> TagResourceRequest {
        TagResourceRequest {
            arn: self.arn.clone(),
            tags: non_empty(&self.tags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::*;
    use serde_json::json;

    #[test]
    fn test_parameters_declared() {
        assert_parameters_declared::<TagResource>();
    }

    #[test]
    fn test_request_body() {
        let params = TagResource {
            arn: Some("arn:room/1".into()),
            tags: vec!["floor=3".parse().unwrap(), "team=ops".parse().unwrap()],
        };

        let body = serde_json::to_value(params.build_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "Arn": "arn:room/1",
                "Tags": [
                    { "Key": "floor", "Value": "3" },
                    { "Key": "team", "Value": "ops" }
                ]
            })
        );
    }

    #[test]
    fn test_empty_tag_list_counts_as_missing() {
        let params = TagResource {
            arn: Some("arn:room/1".into()),
            tags: vec![],
        };
        let record = serde_json::to_value(&params).unwrap();

        assert_eq!(
            TagResource::DESCRIPTOR.missing_required(&record),
            vec!["Tag"]
        );
        let body = serde_json::to_value(params.build_request()).unwrap();
        assert!(body.get("Tags").is_none());
    }
}
