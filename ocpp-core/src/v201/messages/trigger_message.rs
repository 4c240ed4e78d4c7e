use super::super::types::{CustomData, Evse, MessageTrigger, StatusInfo, TriggerMessageStatus};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TriggerMessageRequest {
        pub evse: Option<Evse> => opt "evse",
        pub requested_message: MessageTrigger => req "requestedMessage",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TriggerMessageResponse {
        pub status: TriggerMessageStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
