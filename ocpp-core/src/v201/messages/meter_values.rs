use super::super::types::{CustomData, MeterValue};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct MeterValuesRequest {
        pub evse_id: i32 => req "evseId" [min 0],
        pub meter_value: OrderedSet<MeterValue> => set "meterValue",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct MeterValuesResponse {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
