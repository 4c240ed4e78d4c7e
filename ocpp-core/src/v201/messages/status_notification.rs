use chrono::{DateTime, Utc};

use super::super::types::{ConnectorStatus, CustomData};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StatusNotificationRequest {
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub connector_status: ConnectorStatus => req "connectorStatus",
        pub evse_id: i32 => req "evseId" [min 0],
        pub connector_id: i32 => req "connectorId" [min 0],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct StatusNotificationResponse {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
