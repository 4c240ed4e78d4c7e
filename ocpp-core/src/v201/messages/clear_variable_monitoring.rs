use super::super::types::{ClearMonitoringResult, CustomData};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearVariableMonitoringRequest {
        pub id: OrderedSet<i32> => set "id",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearVariableMonitoringResponse {
        pub clear_monitoring_result: OrderedSet<ClearMonitoringResult> =>
            set "clearMonitoringResult",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
