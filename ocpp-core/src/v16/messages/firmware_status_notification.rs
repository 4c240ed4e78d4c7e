use super::super::types::FirmwareStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct FirmwareStatusNotificationRequest {
        pub status: FirmwareStatus => req "status",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct FirmwareStatusNotificationResponse {}
}
