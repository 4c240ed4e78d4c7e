use super::super::types::ConfigurationStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeConfigurationRequest {
        pub key: String => req "key" [max_len 50],
        pub value: String => req "value" [max_len 500],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeConfigurationResponse {
        pub status: ConfigurationStatus => req "status",
    }
}
