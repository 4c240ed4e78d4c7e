use super::super::types::DataTransferStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DataTransferRequest {
        pub vendor_id: String => req "vendorId" [max_len 255],
        pub message_id: Option<String> => opt "messageId" [max_len 50],
        pub data: Option<String> => opt "data",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DataTransferResponse {
        pub status: DataTransferStatus => req "status",
        pub data: Option<String> => opt "data",
    }
}
