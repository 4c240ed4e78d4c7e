use super::super::types::{MessageTrigger, TriggerMessageStatus};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TriggerMessageRequest {
        pub requested_message: MessageTrigger => req "requestedMessage",
        pub connector_id: Option<i32> => opt "connectorId" [min 0],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TriggerMessageResponse {
        pub status: TriggerMessageStatus => req "status",
    }
}
