use chrono::{DateTime, Utc};

use super::super::types::CustomData;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct HeartbeatRequest {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct HeartbeatResponse {
        pub current_time: DateTime<Utc> => req "currentTime",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
