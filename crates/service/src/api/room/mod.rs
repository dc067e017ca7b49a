use serde::{Deserialize, Serialize};

pub mod create;
pub mod delete;
pub mod get;
pub mod search;
pub mod update;

// Re-export for convenience
pub use create::{CreateRoom, CreateRoomRequest, CreateRoomResponse};
pub use delete::{DeleteRoom, DeleteRoomRequest, DeleteRoomResponse};
pub use get::{GetRoom, GetRoomRequest, GetRoomResponse};
pub use search::{SearchRooms, SearchRoomsRequest, SearchRoomsResponse};
pub use update::{UpdateRoom, UpdateRoomRequest, UpdateRoomResponse};

pub const NOUN: &str = "Room";

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Room {
    pub room_arn: Option<String>,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub provider_calendar_id: Option<String>,
    pub profile_arn: Option<String>,
}

/// Row of a search result; carries the profile name alongside its arn.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomData {
    pub room_arn: Option<String>,
    pub room_name: Option<String>,
    pub description: Option<String>,
    pub provider_calendar_id: Option<String>,
    pub profile_arn: Option<String>,
    pub profile_name: Option<String>,
}
