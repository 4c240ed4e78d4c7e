use chrono::{DateTime, Utc};

use super::super::types::{BootReason, ChargingStation, CustomData, RegistrationStatus, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct BootNotificationRequest {
        pub charging_station: ChargingStation => req "chargingStation",
        pub reason: BootReason => req "reason",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct BootNotificationResponse {
        pub current_time: DateTime<Utc> => req "currentTime",
        pub interval: i32 => req "interval",
        pub status: RegistrationStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
