use serde::{Deserialize, Serialize};

pub mod create;
pub mod delete;
pub mod get;

pub use create::{CreateProfile, CreateProfileRequest, CreateProfileResponse};
pub use delete::{DeleteProfile, DeleteProfileRequest, DeleteProfileResponse};
pub use get::{GetProfile, GetProfileRequest, GetProfileResponse};

pub const NOUN: &str = "Profile";

pub const DISTANCE_UNITS: &[&str] = &["METRIC", "IMPERIAL"];
pub const TEMPERATURE_UNITS: &[&str] = &["FAHRENHEIT", "CELSIUS"];
pub const WAKE_WORDS: &[&str] = &["ALEXA", "AMAZON", "ECHO", "COMPUTER"];
pub const REMINDER_TYPES: &[&str] = &[
    "ANNOUNCEMENT_TIME_CHECK",
    "ANNOUNCEMENT_VARIABLE_TIME_LEFT",
    "CHIME",
    "KNOCK",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceUnit {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WakeWord {
    Alexa,
    Amazon,
    Echo,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "clap", value(rename_all = "SCREAMING_SNAKE_CASE"))]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EndOfMeetingReminderType {
    AnnouncementTimeCheck,
    AnnouncementVariableTimeLeft,
    Chime,
    Knock,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndOfMeetingReminder {
    pub enabled: Option<bool>,
    pub reminder_at_minutes: Option<Vec<i32>>,
    pub reminder_type: Option<EndOfMeetingReminderType>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstantBooking {
    pub enabled: Option<bool>,
    pub duration_in_minutes: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequireCheckIn {
    pub enabled: Option<bool>,
    pub release_after_minutes: Option<i32>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeetingRoomConfiguration {
    pub room_utilization_metrics_enabled: Option<bool>,
    pub end_of_meeting_reminder: Option<EndOfMeetingReminder>,
    pub instant_booking: Option<InstantBooking>,
    pub require_check_in: Option<RequireCheckIn>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    pub profile_arn: Option<String>,
    pub profile_name: Option<String>,
    pub is_default: Option<bool>,
    pub address: Option<String>,
    pub timezone: Option<String>,
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_wire_names_match_declared_constants() {
        let distance = [DistanceUnit::Metric, DistanceUnit::Imperial];
        for (value, name) in distance.iter().zip(DISTANCE_UNITS) {
            assert_eq!(serde_json::to_value(value).unwrap(), json!(name));
        }

        let reminder = [
            EndOfMeetingReminderType::AnnouncementTimeCheck,
            EndOfMeetingReminderType::AnnouncementVariableTimeLeft,
            EndOfMeetingReminderType::Chime,
            EndOfMeetingReminderType::Knock,
        ];
        for (value, name) in reminder.iter().zip(REMINDER_TYPES) {
            assert_eq!(serde_json::to_value(value).unwrap(), json!(name));
        }

        assert_eq!(
            serde_json::to_value(WakeWord::Computer).unwrap(),
            json!("COMPUTER")
        );
        assert_eq!(
            serde_json::to_value(TemperatureUnit::Celsius).unwrap(),
            json!("CELSIUS")
        );
    }

    #[test]
    fn test_profile_pstn_member_name() {
        let profile = Profile {
            pstn_enabled: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(profile).unwrap(),
            json!({ "PSTNEnabled": true })
        );
    }
}
