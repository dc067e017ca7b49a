use serde::{Deserialize, Serialize};

use common::prelude::*;

use super::{
    DistanceUnit, EndOfMeetingReminder, EndOfMeetingReminderType, InstantBooking,
    MeetingRoomConfiguration, RequireCheckIn, TemperatureUnit, WakeWord, DISTANCE_UNITS, NOUN,
    REMINDER_TYPES, TEMPERATURE_UNITS, WAKE_WORDS,
};
use crate::api::{Operation, SERVICE};

/// Parameters of `New-Profile`.
///
/// The meeting room configuration is a nested member on the wire; here it is
/// flattened into `<Member>_<Field>` parameters and reassembled when the
/// request is built.
#[derive(Debug, Clone, Default, Serialize)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfile {
    /// Name of the profile
    #[cfg_attr(feature = "clap", arg(long))]
    pub profile_name: Option<String>,

    /// Time zone of the rooms using the profile
    #[cfg_attr(feature = "clap", arg(long))]
    pub timezone: Option<String>,

    /// Street address of the rooms using the profile
    #[cfg_attr(feature = "clap", arg(long))]
    pub address: Option<String>,

    #[cfg_attr(feature = "clap", arg(long, ignore_case = true))]
    pub distance_unit: Option<DistanceUnit>,

    #[cfg_attr(feature = "clap", arg(long, ignore_case = true))]
    pub temperature_unit: Option<TemperatureUnit>,

    #[cfg_attr(feature = "clap", arg(long, ignore_case = true))]
    pub wake_word: Option<WakeWord>,

    /// Locale, e.g. en-US
    #[cfg_attr(feature = "clap", arg(long))]
    pub locale: Option<String>,

    #[cfg_attr(feature = "clap", arg(long))]
    pub setup_mode_disabled: Option<bool>,

    #[cfg_attr(feature = "clap", arg(long))]
    pub max_volume_limit: Option<i32>,

    /// Whether outbound calls to phone numbers are allowed
    #[cfg_attr(feature = "clap", arg(long = "pstn-enabled"))]
    #[serde(rename = "PSTNEnabled")]
    pub pstn_enabled: Option<bool>,

    #[cfg_attr(feature = "clap", arg(long))]
    pub data_retention_opt_in: Option<bool>,

    /// Idempotency token; only sent when given
    #[cfg_attr(feature = "clap", arg(long))]
    pub client_request_token: Option<String>,

    /// Tag to apply, as KEY=VALUE (repeatable)
    #[cfg_attr(feature = "clap", arg(long = "tag", value_name = "KEY=VALUE"))]
    #[serde(rename = "Tag")]
    pub tags: Vec<Tag>,

    #[cfg_attr(feature = "clap", arg(long = "room-utilization-metrics-enabled"))]
    #[serde(rename = "MeetingRoomConfiguration_RoomUtilizationMetricsEnabled")]
    pub room_utilization_metrics_enabled: Option<bool>,

    #[cfg_attr(feature = "clap", arg(long = "end-of-meeting-reminder-enabled"))]
    #[serde(rename = "EndOfMeetingReminder_Enabled")]
    pub end_of_meeting_reminder_enabled: Option<bool>,

    /// Minutes before the end of a meeting to remind at (comma separated)
    #[cfg_attr(
        feature = "clap",
        arg(long = "end-of-meeting-reminder-at-minute", value_delimiter = ',')
    )]
    #[serde(rename = "EndOfMeetingReminder_ReminderAtMinute")]
    pub end_of_meeting_reminder_at_minutes: Vec<i32>,

    #[cfg_attr(
        feature = "clap",
        arg(long = "end-of-meeting-reminder-type", ignore_case = true)
    )]
    #[serde(rename = "EndOfMeetingReminder_ReminderType")]
    pub end_of_meeting_reminder_type: Option<EndOfMeetingReminderType>,

    #[cfg_attr(feature = "clap", arg(long = "instant-booking-enabled"))]
    #[serde(rename = "InstantBooking_Enabled")]
    pub instant_booking_enabled: Option<bool>,

    #[cfg_attr(feature = "clap", arg(long = "instant-booking-duration-in-minute"))]
    #[serde(rename = "InstantBooking_DurationInMinute")]
    pub instant_booking_duration_in_minutes: Option<i32>,

    #[cfg_attr(feature = "clap", arg(long = "require-check-in-enabled"))]
    #[serde(rename = "RequireCheckIn_Enabled")]
    pub require_check_in_enabled: Option<bool>,

    #[cfg_attr(feature = "clap", arg(long = "require-check-in-release-after-minute"))]
    #[serde(rename = "RequireCheckIn_ReleaseAfterMinute")]
    pub require_check_in_release_after_minutes: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfileRequest {
    pub profile_name: Option<String>,
    pub timezone: Option<String>,
    pub address: Option<String>,
    pub distance_unit: Option<DistanceUnit>,
    pub temperature_unit: Option<TemperatureUnit>,
    pub wake_word: Option<WakeWord>,
    pub locale: Option<String>,
    pub setup_mode_disabled: Option<bool>,
    pub max_volume_limit: Option<i32>,
    #[serde(rename = "PSTNEnabled")]
    pub pstn_enabled: Option<bool>,
    pub data_retention_opt_in: Option<bool>,
    pub meeting_room_configuration: Option<MeetingRoomConfiguration>,
    pub client_request_token: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateProfileResponse {
    pub profile_arn: Option<String>,
}

impl CreateProfile {
    fn meeting_room_configuration(&self) -> Option<MeetingRoomConfiguration> {
        let end_of_meeting_reminder = present_if_any(EndOfMeetingReminder {
            enabled: self.end_of_meeting_reminder_enabled,
            reminder_at_minutes: non_empty(&self.end_of_meeting_reminder_at_minutes),
            reminder_type: self.end_of_meeting_reminder_type,
        });
        let instant_booking = present_if_any(InstantBooking {
            enabled: self.instant_booking_enabled,
            duration_in_minutes: self.instant_booking_duration_in_minutes,
        });
        let require_check_in = present_if_any(RequireCheckIn {
            enabled: self.require_check_in_enabled,
            release_after_minutes: self.require_check_in_release_after_minutes,
        });

        present_if_any(MeetingRoomConfiguration {
            room_utilization_metrics_enabled: self.room_utilization_metrics_enabled,
            end_of_meeting_reminder,
            instant_booking,
            require_check_in,
        })
    }
}

impl Operation for CreateProfile {
    type Request = CreateProfileRequest;
    type Response = CreateProfileResponse;

    const DESCRIPTOR: &'static OperationDescriptor = &OperationDescriptor {
        service: SERVICE,
        operation: "CreateProfile",
        verb: Verb::New,
        noun: NOUN,
        request_type: "CreateProfileRequest",
        response_type: "CreateProfileResponse",
        parameters: &[
            ParameterBinding::new("ProfileName", ParamKind::String).required(),
            ParameterBinding::new("Timezone", ParamKind::String).required(),
            ParameterBinding::new("Address", ParamKind::String).required(),
            ParameterBinding::new("DistanceUnit", ParamKind::Enum(DISTANCE_UNITS)).required(),
            ParameterBinding::new("TemperatureUnit", ParamKind::Enum(TEMPERATURE_UNITS)).required(),
            ParameterBinding::new("WakeWord", ParamKind::Enum(WAKE_WORDS)).required(),
            ParameterBinding::new("Locale", ParamKind::String),
            ParameterBinding::new("SetupModeDisabled", ParamKind::Boolean),
            ParameterBinding::new("MaxVolumeLimit", ParamKind::Integer),
            ParameterBinding::new("PSTNEnabled", ParamKind::Boolean),
            ParameterBinding::new("DataRetentionOptIn", ParamKind::Boolean),
            ParameterBinding::new("ClientRequestToken", ParamKind::String),
            ParameterBinding::new("Tag", ParamKind::TagList).remote("Tags"),
            ParameterBinding::new(
                "MeetingRoomConfiguration_RoomUtilizationMetricsEnabled",
                ParamKind::Boolean,
            )
            .remote("MeetingRoomConfiguration.RoomUtilizationMetricsEnabled"),
            ParameterBinding::new("EndOfMeetingReminder_Enabled", ParamKind::Boolean)
                .remote("MeetingRoomConfiguration.EndOfMeetingReminder.Enabled"),
            ParameterBinding::new(
                "EndOfMeetingReminder_ReminderAtMinute",
                ParamKind::IntegerList,
            )
            .remote("MeetingRoomConfiguration.EndOfMeetingReminder.ReminderAtMinutes"),
            ParameterBinding::new(
                "EndOfMeetingReminder_ReminderType",
                ParamKind::Enum(REMINDER_TYPES),
            )
            .remote("MeetingRoomConfiguration.EndOfMeetingReminder.ReminderType"),
            ParameterBinding::new("InstantBooking_Enabled", ParamKind::Boolean)
                .remote("MeetingRoomConfiguration.InstantBooking.Enabled"),
            ParameterBinding::new("InstantBooking_DurationInMinute", ParamKind::Integer)
                .remote("MeetingRoomConfiguration.InstantBooking.DurationInMinutes"),
            ParameterBinding::new("RequireCheckIn_Enabled", ParamKind::Boolean)
                .remote("MeetingRoomConfiguration.RequireCheckIn.Enabled"),
            ParameterBinding::new("RequireCheckIn_ReleaseAfterMinute", ParamKind::Integer)
                .remote("MeetingRoomConfiguration.RequireCheckIn.ReleaseAfterMinutes"),
        ],
        response_fields: &["ProfileArn"],
        default_output: DefaultOutput::Field("ProfileArn"),
        confirm_impact: ConfirmImpact::Medium,
        target_parameter: Some("ProfileName"),
        pass_through: Some("ProfileName"),
    };

    fn build_request(&self) -> CreateProfileRequest {
        CreateProfileRequest {
            profile_name: self.profile_name.clone(),
            timezone: self.timezone.clone(),
            address: self.address.clone(),
            distance_unit: self.distance_unit,
            temperature_unit: self.temperature_unit,
            wake_word: self.wake_word,
            locale: self.locale.clone(),
            setup_mode_disabled: self.setup_mode_disabled,
            max_volume_limit: self.max_volume_limit,
            pstn_enabled: self.pstn_enabled,
            data_retention_opt_in: self.data_retention_opt_in,
            meeting_room_configuration: self.meeting_room_configuration(),
            client_request_token: self.client_request_token.clone(),
            tags: non_empty(&self.tags),
        }
    }
}
