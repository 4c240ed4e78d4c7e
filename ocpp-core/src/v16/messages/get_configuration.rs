use super::super::types::KeyValue;
use crate::set::OrderedSet;

record! {
    /// Without `key` the charge point reports its whole configuration.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetConfigurationRequest {
        pub key: Option<OrderedSet<String>> => bag "key" [each_max_len 50],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetConfigurationResponse {
        pub configuration_key: Option<OrderedSet<KeyValue>> => bag "configurationKey",
        pub unknown_key: Option<OrderedSet<String>> => bag "unknownKey" [each_max_len 50],
    }
}
