use super::super::types::{CustomData, RequestStartStopStatus, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RequestStopTransactionRequest {
        pub transaction_id: String => req "transactionId" [max_len 36],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RequestStopTransactionResponse {
        pub status: RequestStartStopStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
