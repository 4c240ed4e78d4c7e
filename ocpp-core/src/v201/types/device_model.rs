//! Components, variables and monitors of the 2.0.1 device model.

use super::{
    AttributeType, ClearMonitoringStatus, CustomData, DataType, Evse, GetVariableStatus, MonitorType,
    Mutability, SetMonitoringStatus, SetVariableStatus, StatusInfo,
};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Component {
        pub name: String => req "name" [max_len 50],
        pub instance: Option<String> => opt "instance" [max_len 50],
        pub evse: Option<Evse> => opt "evse",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance: None,
            evse: None,
            custom_data: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Variable {
        pub name: String => req "name" [max_len 50],
        pub instance: Option<String> => opt "instance" [max_len 50],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instance: None,
            custom_data: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetVariableData {
        pub attribute_type: Option<AttributeType> => opt "attributeType",
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetVariableResult {
        pub attribute_status: GetVariableStatus => req "attributeStatus",
        pub attribute_type: Option<AttributeType> => opt "attributeType",
        pub attribute_value: Option<String> => opt "attributeValue" [max_len 2500],
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub attribute_status_info: Option<StatusInfo> => opt "attributeStatusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetVariableData {
        pub attribute_type: Option<AttributeType> => opt "attributeType",
        pub attribute_value: String => req "attributeValue" [max_len 1000],
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetVariableResult {
        pub attribute_type: Option<AttributeType> => opt "attributeType",
        pub attribute_status: SetVariableStatus => req "attributeStatus",
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub attribute_status_info: Option<StatusInfo> => opt "attributeStatusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct SetMonitoringData {
        /// Present when replacing an existing monitor.
        pub id: Option<i32> => opt "id",
        pub transaction: Option<bool> => opt "transaction",
        pub value: f64 => req "value",
        pub kind: MonitorType => req "type",
        pub severity: i32 => req "severity" [min 0, max 9],
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SetMonitoringResult {
        pub id: Option<i32> => opt "id",
        pub status: SetMonitoringStatus => req "status",
        pub kind: MonitorType => req "type",
        pub severity: i32 => req "severity" [min 0, max 9],
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ClearMonitoringResult {
        pub status: ClearMonitoringStatus => req "status",
        pub id: i32 => req "id",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct VariableAttribute {
        pub kind: Option<AttributeType> => opt "type",
        pub value: Option<String> => opt "value" [max_len 2500],
        pub mutability: Option<Mutability> => opt "mutability",
        pub persistent: Option<bool> => opt "persistent",
        pub constant: Option<bool> => opt "constant",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct VariableCharacteristics {
        pub unit: Option<String> => opt "unit" [max_len 16],
        pub data_type: DataType => req "dataType",
        pub min_limit: Option<f64> => opt "minLimit",
        pub max_limit: Option<f64> => opt "maxLimit",
        pub values_list: Option<String> => opt "valuesList" [max_len 1000],
        pub supports_monitoring: bool => req "supportsMonitoring",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ReportData {
        pub component: Component => req "component",
        pub variable: Variable => req "variable",
        pub variable_attribute: OrderedSet<VariableAttribute> =>
            set "variableAttribute" [max_items 4],
        pub variable_characteristics: Option<VariableCharacteristics> =>
            opt "variableCharacteristics",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
