use super::super::types::{
    ChargingProfileCriterion, ClearChargingProfileStatus, CustomData, StatusInfo,
};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ClearChargingProfileRequest {
        pub charging_profile_id: Option<i32> => opt "chargingProfileId",
        pub charging_profile_criteria: Option<ChargingProfileCriterion> =>
            opt "chargingProfileCriteria",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearChargingProfileResponse {
        pub status: ClearChargingProfileStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
