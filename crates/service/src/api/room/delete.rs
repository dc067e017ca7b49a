use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRoom {
    /// Room to delete
    #[cfg_attr(feature = "clap", arg(long))]
    pub room_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRoomRequest {
    pub room_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRoomResponse {}

impl Operation for DeleteRoom {
    type Request = DeleteRoomRequest;
    type Response = DeleteRoomResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "DeleteRoom",
        verb: Verb::Remove,
        noun: NOUN,
        request_type: "DeleteRoomRequest",
        response_type: "DeleteRoomResponse",
        parameters: &[ParameterBinding::new("RoomArn", ParamKind::String)],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::High,
        target_parameter: Some("RoomArn"),
        pass_through: Some("RoomArn"),
    };

    fn build_request(&self) -> DeleteRoomRequest {
        DeleteRoomRequest {
            room_arn: self.room_arn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::*;

    #[test]
    fn test_parameters_declared() {
        assert_parameters_declared::<DeleteRoom>();
    }

    #[test]
    fn test_high_impact() {
        assert!(DeleteRoom::DESCRIPTOR.is_mutating());
        assert_eq!(DeleteRoom::DESCRIPTOR.confirm_impact, ConfirmImpact::High);
    }
}
