use super::super::types::RemoteStartStopStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RemoteStopTransactionRequest {
        pub transaction_id: i32 => req "transactionId",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct RemoteStopTransactionResponse {
        pub status: RemoteStartStopStatus => req "status",
    }
}
