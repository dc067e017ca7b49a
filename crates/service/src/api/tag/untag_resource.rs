use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct UntagResource {
    /// Resource to untag
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "resource-arn"))]
    pub arn: Option<String>,

    /// Key of a tag to remove (repeatable, or comma separated)
    #[cfg_attr(feature = "clap", arg(long = "tag-key", value_delimiter = ','))]
    #[serde(rename = "TagKey")]
    pub tag_keys: Vec<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceRequest {
    pub arn: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UntagResourceResponse {}

impl Operation for UntagResource {
    type Request = UntagResourceRequest;
    type Response = UntagResourceResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "UntagResource",
        verb: Verb::Remove,
        noun: NOUN,
        request_type: "UntagResourceRequest",
        response_type: "UntagResourceResponse",
        parameters: &[
            ParameterBinding::new("Arn", ParamKind::String)
                .aliases(&["ResourceArn"])
                .required(),
            ParameterBinding::new("TagKey", ParamKind::StringList)
                .remote("TagKeys")
                .required(),
        ],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::High,
        target_parameter: Some("Arn"),
        pass_through: Some("Arn"),
    };

    fn build_request(&self) -> UntagResourceRequest {
        UntagResourceRequest {
            arn: self.arn.clone(),
            tag_keys: non_empty(&self.tag_keys),
        }
    }
}
