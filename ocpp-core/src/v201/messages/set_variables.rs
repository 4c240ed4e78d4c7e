use super::super::types::{CustomData, SetVariableData, SetVariableResult};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetVariablesRequest {
        pub set_variable_data: OrderedSet<SetVariableData> => set "setVariableData",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetVariablesResponse {
        pub set_variable_result: OrderedSet<SetVariableResult> => set "setVariableResult",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
