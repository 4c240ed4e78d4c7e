use chrono::{DateTime, Utc};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetDiagnosticsRequest {
        /// Upload URI.
        pub location: String => req "location",
        pub retries: Option<i32> => opt "retries",
        pub retry_interval: Option<i32> => opt "retryInterval",
        pub start_time: Option<DateTime<Utc>> => opt "startTime",
        pub stop_time: Option<DateTime<Utc>> => opt "stopTime",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetDiagnosticsResponse {
        pub file_name: Option<String> => opt "fileName" [max_len 255],
    }
}
