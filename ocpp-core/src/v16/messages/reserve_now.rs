use chrono::{DateTime, Utc};

use super::super::types::ReservationStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ReserveNowRequest {
        pub connector_id: i32 => req "connectorId" [min 0],
        pub expiry_date: DateTime<Utc> => req "expiryDate",
        pub id_tag: String => req "idTag" [max_len 20],
        pub parent_id_tag: Option<String> => opt "parentIdTag" [max_len 20],
        pub reservation_id: i32 => req "reservationId",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ReserveNowResponse {
        pub status: ReservationStatus => req "status",
    }
}
