use super::super::types::{CustomData, GetVariableData, GetVariableResult};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetVariablesRequest {
        pub get_variable_data: OrderedSet<GetVariableData> => set "getVariableData",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetVariablesResponse {
        pub get_variable_result: OrderedSet<GetVariableResult> => set "getVariableResult",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
