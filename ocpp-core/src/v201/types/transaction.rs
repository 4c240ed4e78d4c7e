use super::{ChargingState, CustomData, Reason};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Transaction {
        pub transaction_id: String => req "transactionId" [max_len 36],
        pub charging_state: Option<ChargingState> => opt "chargingState",
        /// Seconds spent charging so far.
        pub time_spent_charging: Option<i32> => opt "timeSpentCharging",
        pub stopped_reason: Option<Reason> => opt "stoppedReason",
        pub remote_start_id: Option<i32> => opt "remoteStartId",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl Transaction {
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            charging_state: None,
            time_spent_charging: None,
            stopped_reason: None,
            remote_start_id: None,
            custom_data: None,
        }
    }
}
