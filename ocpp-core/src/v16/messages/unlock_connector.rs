use super::super::types::UnlockStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UnlockConnectorRequest {
        pub connector_id: i32 => req "connectorId" [min 1],
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct UnlockConnectorResponse {
        pub status: UnlockStatus => req "status",
    }
}
