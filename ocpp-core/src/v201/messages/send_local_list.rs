use super::super::types::{
    AuthorizationData, CustomData, SendLocalListStatus, StatusInfo, UpdateType,
};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SendLocalListRequest {
        pub version_number: i32 => req "versionNumber",
        pub update_type: UpdateType => req "updateType",
        pub local_authorization_list: Option<OrderedSet<AuthorizationData>> =>
            opt_set "localAuthorizationList",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SendLocalListResponse {
        pub status: SendLocalListStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
