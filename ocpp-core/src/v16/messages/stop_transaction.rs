use chrono::{DateTime, Utc};

use super::super::types::{IdTagInfo, MeterValue, Reason};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StopTransactionRequest {
        pub id_tag: Option<String> => opt "idTag" [max_len 20],
        pub meter_stop: i32 => req "meterStop",
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub transaction_id: i32 => req "transactionId",
        pub reason: Option<Reason> => opt "reason",
        pub transaction_data: Option<OrderedSet<MeterValue>> => bag "transactionData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct StopTransactionResponse {
        pub id_tag_info: Option<IdTagInfo> => opt "idTagInfo",
    }
}
