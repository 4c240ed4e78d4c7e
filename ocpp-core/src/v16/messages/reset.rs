use super::super::types::{ResetStatus, ResetType};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ResetRequest {
        pub kind: ResetType => req "type",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ResetResponse {
        pub status: ResetStatus => req "status",
    }
}
