use chrono::{DateTime, Utc};

use super::{CustomData, Location, Measurand, Phase, ReadingContext};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SignedMeterValue {
        pub signed_meter_data: String => req "signedMeterData" [max_len 2500],
        pub signing_method: String => req "signingMethod" [max_len 50],
        pub encoding_method: String => req "encodingMethod" [max_len 50],
        pub public_key: String => req "publicKey" [max_len 2500],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    /// Absent `unit` means Wh, absent `multiplier` means 0.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct UnitOfMeasure {
        pub unit: Option<String> => opt "unit" [max_len 20],
        pub multiplier: Option<i32> => opt "multiplier",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SampledValue {
        pub value: f64 => req "value",
        pub context: Option<ReadingContext> => opt "context",
        pub measurand: Option<Measurand> => opt "measurand",
        pub phase: Option<Phase> => opt "phase",
        pub location: Option<Location> => opt "location",
        pub signed_meter_value: Option<SignedMeterValue> => opt "signedMeterValue",
        pub unit_of_measure: Option<UnitOfMeasure> => opt "unitOfMeasure",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl SampledValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            context: None,
            measurand: None,
            phase: None,
            location: None,
            signed_meter_value: None,
            unit_of_measure: None,
            custom_data: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct MeterValue {
        pub sampled_value: OrderedSet<SampledValue> => set "sampledValue",
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
