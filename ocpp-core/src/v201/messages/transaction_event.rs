use chrono::{DateTime, Utc};

use super::super::types::{
    CustomData, Evse, IdToken, IdTokenInfo, MessageContent, MeterValue, Transaction, TransactionEventType, TriggerReason,
};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct TransactionEventRequest {
        pub event_type: TransactionEventType => req "eventType",
        pub meter_value: Option<OrderedSet<MeterValue>> => opt_set "meterValue",
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub trigger_reason: TriggerReason => req "triggerReason",
        pub seq_no: i32 => req "seqNo" [min 0],
        pub offline: Option<bool> => opt "offline",
        pub number_of_phases_used: Option<i32> => opt "numberOfPhasesUsed" [min 0, max 3],
        pub cable_max_current: Option<i32> => opt "cableMaxCurrent",
        pub reservation_id: Option<i32> => opt "reservationId",
        pub transaction_info: Transaction => req "transactionInfo",
        pub evse: Option<Evse> => opt "evse",
        pub id_token: Option<IdToken> => opt "idToken",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct TransactionEventResponse {
        pub total_cost: Option<f64> => opt "totalCost",
        pub charging_priority: Option<i32> => opt "chargingPriority" [min -9, max 9],
        pub id_token_info: Option<IdTokenInfo> => opt "idTokenInfo",
        pub updated_personal_message: Option<MessageContent> => opt "updatedPersonalMessage",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
