use chrono::{DateTime, Utc};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct HeartbeatRequest {}
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct HeartbeatResponse {
        pub current_time: DateTime<Utc> => req "currentTime",
    }
}
