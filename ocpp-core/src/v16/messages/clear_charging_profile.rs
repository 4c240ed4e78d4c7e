use super::super::types::{ChargingProfilePurposeType, ClearChargingProfileStatus};

record! {
    /// All criteria are optional; an empty request clears every profile.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ClearChargingProfileRequest {
        pub id: Option<i32> => opt "id",
        pub connector_id: Option<i32> => opt "connectorId",
        pub charging_profile_purpose: Option<ChargingProfilePurposeType> =>
            opt "chargingProfilePurpose",
        pub stack_level: Option<i32> => opt "stackLevel",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearChargingProfileResponse {
        pub status: ClearChargingProfileStatus => req "status",
    }
}
