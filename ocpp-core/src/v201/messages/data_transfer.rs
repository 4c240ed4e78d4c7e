use serde_json::Value;

use super::super::types::{CustomData, DataTransferStatus, StatusInfo};

record! {
    /// `data` is free-form JSON.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DataTransferRequest {
        pub message_id: Option<String> => opt "messageId" [max_len 50],
        pub data: Option<Value> => opt "data",
        pub vendor_id: String => req "vendorId" [max_len 255],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct DataTransferResponse {
        pub status: DataTransferStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub data: Option<Value> => opt "data",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
