use super::super::types::DiagnosticsStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DiagnosticsStatusNotificationRequest {
        pub status: DiagnosticsStatus => req "status",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct DiagnosticsStatusNotificationResponse {}
}
