use chrono::{DateTime, Utc};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UpdateFirmwareRequest {
        pub location: String => req "location",
        pub retries: Option<i32> => opt "retries",
        pub retrieve_date: DateTime<Utc> => req "retrieveDate",
        pub retry_interval: Option<i32> => opt "retryInterval",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct UpdateFirmwareResponse {}
}
