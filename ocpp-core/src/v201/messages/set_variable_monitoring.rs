use super::super::types::{CustomData, SetMonitoringData, SetMonitoringResult};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SetVariableMonitoringRequest {
        pub set_monitoring_data: OrderedSet<SetMonitoringData> => set "setMonitoringData",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetVariableMonitoringResponse {
        pub set_monitoring_result: OrderedSet<SetMonitoringResult> => set "setMonitoringResult",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
