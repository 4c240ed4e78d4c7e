use chrono::{DateTime, Utc};

use super::{AuthorizationStatus, CustomData, IdTokenType, MessageFormat};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AdditionalInfo {
        pub additional_id_token: String => req "additionalIdToken" [max_len 36],
        pub kind: String => req "type" [max_len 50],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    /// An identifier a driver presents to start or stop a session.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct IdToken {
        pub id_token: String => req "idToken" [max_len 36],
        pub kind: IdTokenType => req "type",
        pub additional_info: Option<OrderedSet<AdditionalInfo>> => opt_set "additionalInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl IdToken {
    pub fn new(id_token: impl Into<String>, kind: IdTokenType) -> Self {
        Self {
            id_token: id_token.into(),
            kind,
            additional_info: None,
            custom_data: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MessageContent {
        pub format: MessageFormat => req "format",
        pub language: Option<String> => opt "language" [max_len 8],
        pub content: String => req "content" [max_len 512],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct IdTokenInfo {
        pub status: AuthorizationStatus => req "status",
        pub cache_expiry_date_time: Option<DateTime<Utc>> => opt "cacheExpiryDateTime",
        pub charging_priority: Option<i32> => opt "chargingPriority" [min -9, max 9],
        pub language1: Option<String> => opt "language1" [max_len 8],
        pub evse_id: Option<OrderedSet<i32>> => opt_set "evseId",
        pub group_id_token: Option<IdToken> => opt "groupIdToken",
        pub language2: Option<String> => opt "language2" [max_len 8],
        pub personal_message: Option<MessageContent> => opt "personalMessage",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl IdTokenInfo {
    pub fn new(status: AuthorizationStatus) -> Self {
        Self {
            status,
            cache_expiry_date_time: None,
            charging_priority: None,
            language1: None,
            evse_id: None,
            group_id_token: None,
            language2: None,
            personal_message: None,
            custom_data: None,
        }
    }
}

record! {
    /// One entry of the local authorization list.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizationData {
        pub id_token: IdToken => req "idToken",
        pub id_token_info: Option<IdTokenInfo> => opt "idTokenInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
