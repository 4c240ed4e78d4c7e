use super::super::types::{ClearCacheStatus, CustomData, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ClearCacheRequest {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearCacheResponse {
        pub status: ClearCacheStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
