use super::super::types::{ChargingProfile, ChargingProfileStatus, CustomData, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SetChargingProfileRequest {
        pub evse_id: i32 => req "evseId" [min 0],
        pub charging_profile: ChargingProfile => req "chargingProfile",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetChargingProfileResponse {
        pub status: ChargingProfileStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
