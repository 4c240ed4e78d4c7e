use chrono::{DateTime, Utc};

use super::SampledValue;
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MeterValue {
        pub timestamp: DateTime<Utc> => req "timestamp",
        pub sampled_value: OrderedSet<SampledValue> => set "sampledValue",
    }
}
