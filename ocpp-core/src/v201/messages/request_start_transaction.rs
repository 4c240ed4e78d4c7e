use super::super::types::{ChargingProfile, CustomData, IdToken, RequestStartStopStatus, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct RequestStartTransactionRequest {
        pub evse_id: Option<i32> => opt "evseId" [min 1],
        pub remote_start_id: i32 => req "remoteStartId",
        pub id_token: IdToken => req "idToken",
        pub charging_profile: Option<ChargingProfile> => opt "chargingProfile",
        pub group_id_token: Option<IdToken> => opt "groupIdToken",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RequestStartTransactionResponse {
        pub status: RequestStartStopStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub transaction_id: Option<String> => opt "transactionId" [max_len 36],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
