use super::super::types::{AvailabilityStatus, AvailabilityType};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeAvailabilityRequest {
        /// 0 addresses the whole charge point.
        pub connector_id: i32 => req "connectorId" [min 0],
        pub kind: AvailabilityType => req "type",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChangeAvailabilityResponse {
        pub status: AvailabilityStatus => req "status",
    }
}
