use super::super::types::{ChargingProfile, ChargingProfileStatus};

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SetChargingProfileRequest {
        pub connector_id: i32 => req "connectorId" [min 0],
        pub cs_charging_profiles: ChargingProfile => req "csChargingProfiles",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetChargingProfileResponse {
        pub status: ChargingProfileStatus => req "status",
    }
}
