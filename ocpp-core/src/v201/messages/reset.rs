use super::super::types::{CustomData, ResetStatus, ResetType, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ResetRequest {
        pub kind: ResetType => req "type",
        pub evse_id: Option<i32> => opt "evseId",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ResetResponse {
        pub status: ResetStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
