use super::super::types::{CancelReservationStatus, CustomData, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CancelReservationRequest {
        pub reservation_id: i32 => req "reservationId",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CancelReservationResponse {
        pub status: CancelReservationStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
