use chrono::{DateTime, Utc};

use super::super::types::CustomData;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SecurityEventNotificationRequest {
        pub kind: String => req "type" [max_len 50],
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub tech_info: Option<String> => opt "techInfo" [max_len 255],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct SecurityEventNotificationResponse {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
