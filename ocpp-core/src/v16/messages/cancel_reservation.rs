use super::super::types::CancelReservationStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CancelReservationRequest {
        pub reservation_id: i32 => req "reservationId",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CancelReservationResponse {
        pub status: CancelReservationStatus => req "status",
    }
}
