use chrono::{DateTime, Utc};

use super::super::types::{ChargePointErrorCode, ChargePointStatus};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StatusNotificationRequest {
        pub connector_id: i32 => req "connectorId" [min 0],
        pub error_code: ChargePointErrorCode => req "errorCode",
        pub info: Option<String> => opt "info" [max_len 50],
        pub status: ChargePointStatus => req "status",
        pub timestamp: Option<DateTime<Utc>> => opt "timestamp",
        pub vendor_id: Option<String> => opt "vendorId" [max_len 255],
        pub vendor_error_code: Option<String> => opt "vendorErrorCode" [max_len 50],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct StatusNotificationResponse {}
}
