use chrono::{DateTime, Utc};

use super::super::types::IdTagInfo;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StartTransactionRequest {
        pub connector_id: i32 => req "connectorId" [min 1],
        pub id_tag: String => req "idTag" [max_len 20],
        /// Meter reading in Wh at the start of the transaction.
        pub meter_start: i32 => req "meterStart",
        pub reservation_id: Option<i32> => opt "reservationId",
        pub timestamp: DateTime<Utc> => req "timestamp",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StartTransactionResponse {
        pub id_tag_info: IdTagInfo => req "idTagInfo",
        pub transaction_id: i32 => req "transactionId",
    }
}
