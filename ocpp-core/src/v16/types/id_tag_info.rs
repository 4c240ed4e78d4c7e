use chrono::{DateTime, Utc};

use super::AuthorizationStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct IdTagInfo {
        pub expiry_date: Option<DateTime<Utc>> => opt "expiryDate",
        pub parent_id_tag: Option<String> => opt "parentIdTag" [max_len 20],
        pub status: AuthorizationStatus => req "status",
    }
}
