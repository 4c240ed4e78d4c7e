use super::super::types::{CustomData, StatusInfo, UnlockStatus};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UnlockConnectorRequest {
        pub evse_id: i32 => req "evseId" [min 0],
        pub connector_id: i32 => req "connectorId" [min 0],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UnlockConnectorResponse {
        pub status: UnlockStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
