use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoom {
    /// Room to update
    #[cfg_attr(feature = "clap", arg(long))]
    pub room_arn: Option<String>,

    /// New name for the room
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "name"))]
    pub room_name: Option<String>,

    /// New description
    #[cfg_attr(feature = "clap", arg(long))]
    pub description: Option<String>,

    /// New calendar id at the calendar provider
    #[cfg_attr(feature = "clap", arg(long))]
    pub provider_calendar_id: Option<String>,

    /// Profile to associate with the room
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "profile"))]
    pub profile_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRoomRequest {
    pub room_arn: Option<String>,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub provider_calendar_id: Option<String>,
    pub profile_arn: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRoomResponse {}

impl Operation for UpdateRoom {
    type Request = UpdateRoomRequest;
    type Response = UpdateRoomResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "UpdateRoom",
        verb: Verb::Update,
        noun: NOUN,
        request_type: "UpdateRoomRequest",
        response_type: "UpdateRoomResponse",
        parameters: &[
            ParameterBinding::new("RoomArn", ParamKind::String),
            ParameterBinding::new("RoomName", ParamKind::String).aliases(&["Name"]),
            ParameterBinding::new("Description", ParamKind::String),
            ParameterBinding::new("ProviderCalendarId", ParamKind::String),
            ParameterBinding::new("ProfileArn", ParamKind::String).aliases(&["Profile"]),
        ],
        response_fields: &[],
        default_output: DefaultOutput::Nothing,
        confirm_impact: ConfirmImpact::Medium,
        target_parameter: Some("RoomArn"),
        pass_through: Some("RoomArn"),
    };

    fn build_request(&self) -> UpdateRoomRequest {
        UpdateRoomRequest {
            room_arn: self.room_arn.clone(),
            room_name: self.room_name.clone(),
            description: self.description.clone(),
            provider_calendar_id: self.provider_calendar_id.clone(),
            profile_arn: self.profile_arn.clone(),
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
        assert_parameters_declared::<UpdateRoom>();
    }

    #[test]
    fn test_empty_string_is_sent() {
        // clearing a description is an explicit empty value, not an omission
        let params = UpdateRoom {
            room_arn: Some("arn:room/1".into()),
            description: Some(String::new()),
            ..Default::default()
        };

        let body = serde_json::to_value(params.build_request()).unwrap();
        assert_eq!(body, json!({ "RoomArn": "arn:room/1", "Description": "" }));
    }

    #[test]
    fn test_empty_response_decodes() {
        let response: UpdateRoomResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response, UpdateRoomResponse {});
    }
}
