use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteProfile {
    /// Profile to delete
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "profile"))]
    pub profile_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteProfileRequest {
    pub profile_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProfileResponse {}

impl Operation for DeleteProfile {
    type Request = DeleteProfileRequest;
    type Response = DeleteProfileResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "DeleteProfile",
        verb: Verb::Remove,
        noun: NOUN,
        request_type: "DeleteProfileRequest",
        response_type: "DeleteProfileResponse",
        parameters: &[
            ParameterBinding::new("ProfileArn", ParamKind::String)
                .aliases(&["Profile"])
                .required(),
        ],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::High,
        target_parameter: Some("ProfileArn"),
        pass_through: Some("ProfileArn"),
    };

    fn build_request(&self) -> DeleteProfileRequest {
        DeleteProfileRequest {
            profile_arn: self.profile_arn.clone(),
        }
    }
}
