use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::{Profile, NOUN};
use crate::api::{Operation, SERVICE};

#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct GetProfile {
    /// Profile to describe; the service returns the default profile when omitted
    #[cfg_attr(feature = "clap", arg(long, visible_alias = "profile"))]
    pub profile_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetProfileRequest {
    pub profile_arn: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetProfileResponse {
    pub profile: Option<Profile>,
}

impl Operation for GetProfile {
    type Request = GetProfileRequest;
    type Response = GetProfileResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "GetProfile",
        verb: Verb::Get,
        noun: NOUN,
        request_type: "GetProfileRequest",
        response_type: "GetProfileResponse",
        parameters: &[ParameterBinding::new("ProfileArn", ParamKind::String).aliases(&["Profile"])],
        response_fields: &["Profile"],
        default_output: DefaultOutput::Field("Profile"),
        confirm_impact: ConfirmImpact::None,
        target_parameter: None,
        pass_through: None,
    };

    fn build_request(&self) -> GetProfileRequest {
        GetProfileRequest {
            profile_arn: self.profile_arn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::profile::WakeWord;
    use crate::api::test_support::*;
    use serde_json::json;

    #[test]
    fn test_parameters_declared() {
        assert_parameters_declared::<GetProfile>();
        assert_response_declared::<GetProfile>(&GetProfileResponse {
            profile: Some(Profile::default()),
        });
    }

    #[test]
    fn test_alias_resolves() {
        let binding = GetProfile::DESCRIPTOR.parameter("profile").unwrap();
        assert_eq!(binding.name, "ProfileArn");
    }

    #[test]
    fn test_response_decodes_nested_configuration() {
        let response: GetProfileResponse = serde_json::from_value(json!({
            "Profile": {
                "ProfileArn": "arn:profile/1",
                "WakeWord": "ECHO",
                "MeetingRoomConfiguration": {
                    "InstantBooking": { "Enabled": true, "DurationInMinutes": 30 }
                }
            }
        }))
        .unwrap();

        let profile = response.profile.unwrap();
        assert_eq!(profile.wake_word, Some(WakeWord::Echo));
        let booking = profile
            .meeting_room_configuration
            .and_then(|c| c.instant_booking)
            .unwrap();
        assert_eq!(booking.duration_in_minutes, Some(30));
    }
}
