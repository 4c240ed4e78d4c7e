use super::super::types::MeterValue;
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MeterValuesRequest {
        pub connector_id: i32 => req "connectorId" [min 0],
        pub transaction_id: Option<i32> => opt "transactionId",
        pub meter_value: OrderedSet<MeterValue> => set "meterValue",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct MeterValuesResponse {}
}
