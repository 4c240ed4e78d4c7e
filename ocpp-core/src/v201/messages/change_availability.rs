use super::super::types::{
    ChangeAvailabilityStatus, CustomData, Evse, OperationalStatus, StatusInfo,
};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeAvailabilityRequest {
        pub evse: Option<Evse> => opt "evse",
        pub operational_status: OperationalStatus => req "operationalStatus",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeAvailabilityResponse {
        pub status: ChangeAvailabilityStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
