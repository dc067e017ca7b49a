use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::{Room, NOUN};
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct GetRoom {
    /// Room to describe; the service falls back to the caller's room when omitted
    #[cfg_attr(feature = "clap", arg(long))]
    pub room_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomRequest {
    pub room_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetRoomResponse {
    pub room: Option<Room>,
}

impl Operation for GetRoom {
    type Request = GetRoomRequest;
    type Response = GetRoomResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "GetRoom",
        verb: Verb::Get,
        noun: NOUN,
        request_type: "GetRoomRequest",
        response_type: "GetRoomResponse",
        parameters: &[ParameterBinding::new("RoomArn", ParamKind::String)],
        response_fields: &["Room"],
        default_output: DefaultOutput::Field("Room"),
        confirm_impact: ConfirmImpact::None,
        target_parameter: None,
        pass_through: None,
    };

    fn build_request(&self) -> GetRoomRequest {
        GetRoomRequest {
            room_arn: self.room_arn.clone(),
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
        assert_parameters_declared::<GetRoom>();
        assert_response_declared::<GetRoom>(&GetRoomResponse {
            room: Some(Room::default()),
        });
    }

    #[test]
    fn test_empty_request() {
        let body = serde_json::to_value(GetRoom::default().build_request()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_response_decodes_partial_room() {
        let response: GetRoomResponse = serde_json::from_value(json!({
            "Room": { "RoomArn": "arn:room/1", "RoomName": "Lab1" }
        }))
        .unwrap();

        let room = response.room.unwrap();
        assert_eq!(room.room_name.as_deref(), Some("Lab1"));
        assert!(room.description.is_none());
    }
}
