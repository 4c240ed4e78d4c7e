use super::super::types::{AuthorizationData, UpdateStatus, UpdateType};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SendLocalListRequest {
        pub list_version: i32 => req "listVersion",
        /// May be empty with a `Full` update to clear the list.
        pub local_authorization_list: Option<OrderedSet<AuthorizationData>> =>
            bag "localAuthorizationList",
        pub update_type: UpdateType => req "updateType",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SendLocalListResponse {
        pub status: UpdateStatus => req "status",
    }
}
