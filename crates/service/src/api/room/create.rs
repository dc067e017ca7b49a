use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::NOUN;
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoom {
    /// Name of the room to create
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "name"))]
    pub room_name: Option<String>,

    /// Free-form description of the room
    #[cfg_attr(feature = "clap", arg(long))]
    pub description: Option<String>,

    /// Profile to associate with the room
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "profile"))]
    pub profile_arn: Option<String>,

    /// Calendar id of the room at the calendar provider
    #[cfg_attr(feature = "clap", arg(long))]
    pub provider_calendar_id: Option<String>,

    /// Idempotency token; only sent when given
    #[cfg_attr(feature = "clap", arg(long))]
    pub client_request_token: Option<String>,

    /// Tag to apply, as KEY=VALUE (repeatable)
    #[cfg_attr(feature = "clap", arg(long = "tag", value_name = "KEY=VALUE"))]
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoomRequest {
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub profile_arn: Option<String>,
    pub provider_calendar_id: Option<String>,
    pub client_request_token: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRoomResponse {
    pub room_arn: Option<String>,
}

impl Operation for CreateRoom {
    type Request = CreateRoomRequest;
    type Response = CreateRoomResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "CreateRoom",
        verb: Verb::New,
        noun: NOUN,
        request_type: "CreateRoomRequest",
        response_type: "CreateRoomResponse",
        parameters: &[
            ParameterBinding::new("RoomName", ParamKind::String)
                .required()
                .aliases(&["Name"]),
            ParameterBinding::new("Description", ParamKind::String),
            ParameterBinding::new("ProfileArn", ParamKind::String).aliases(&["Profile"]),
            ParameterBinding::new("ProviderCalendarId", ParamKind::String),
            ParameterBinding::new("ClientRequestToken", ParamKind::String),
            ParameterBinding::new("Tag", ParamKind::TagList).remote("Tags"),
        ],
        response_fields: &["RoomArn"],
        default_output: DefaultOutput::Field("RoomArn"),
        confirm_impact: ConfirmImpact::Medium,
        target_parameter: Some("RoomName"),
        pass_through: Some("RoomName"),
    };

    fn build_request(&self) -> CreateRoomRequest {
        CreateRoomRequest {
            room_name: self.room_name.clone(),
            description: self.description.clone(),
            profile_arn: self.profile_arn.clone(),
            provider_calendar_id: self.provider_calendar_id.clone(),
            client_request_token: self.client_request_token.clone(),
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
        assert_parameters_declared::<CreateRoom>();
        assert_response_declared::<CreateRoom>(&CreateRoomResponse {
            room_arn: Some("arn:x".into()),
        });
    }

    #[test]
    fn test_request_only_carries_given_members() {
        let params = CreateRoom {
            room_name: Some("Lab1".into()),
            ..Default::default()
        };

        let body = serde_json::to_value(params.build_request()).unwrap();
        assert_eq!(body, json!({ "RoomName": "Lab1" }));
    }

    #[test]
    fn test_tags_renamed_on_the_wire() {
        let params = CreateRoom {
            room_name: Some("Lab1".into()),
            tags: vec!["floor=2".parse().unwrap()],
            ..Default::default()
        };

        let body = serde_json::to_value(params.build_request()).unwrap();
        assert_eq!(body["Tags"], json!([{ "Key": "floor", "Value": "2" }]));
        assert!(body.get("Tag").is_none());
    }

    #[test]
    fn test_no_token_unless_given() {
        let params = CreateRoom {
            room_name: Some("Lab1".into()),
            ..Default::default()
        };

        let first = params.build_request();
        let second = params.build_request();
        assert_eq!(first, second);
        assert!(first.client_request_token.is_none());
    }
}
