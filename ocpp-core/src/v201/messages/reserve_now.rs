use chrono::{DateTime, Utc};

use super::super::types::{ConnectorType, CustomData, IdToken, ReserveNowStatus, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ReserveNowRequest {
        pub id: i32 => req "id",
        pub expiry_date_time: DateTime<Utc> => req "expiryDateTime",
        pub connector_type: Option<ConnectorType> => opt "connectorType",
        pub evse_id: Option<i32> => opt "evseId",
        pub id_token: IdToken => req "idToken",
        pub group_id_token: Option<IdToken> => opt "groupIdToken",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ReserveNowResponse {
        pub status: ReserveNowStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
