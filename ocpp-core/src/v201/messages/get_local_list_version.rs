use super::super::types::CustomData;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetLocalListVersionRequest {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetLocalListVersionResponse {
        pub version_number: i32 => req "versionNumber",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
