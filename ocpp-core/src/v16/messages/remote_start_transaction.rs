use super::super::types::{ChargingProfile, RemoteStartStopStatus};

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct RemoteStartTransactionRequest {
        pub connector_id: Option<i32> => opt "connectorId" [min 1],
        pub id_tag: String => req "idTag" [max_len 20],
        pub charging_profile: Option<ChargingProfile> => opt "chargingProfile",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RemoteStartTransactionResponse {
        pub status: RemoteStartStopStatus => req "status",
    }
}
