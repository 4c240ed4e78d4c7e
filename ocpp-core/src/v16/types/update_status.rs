ocpp_enum! {
    pub enum UpdateStatus {
        Accepted = "Accepted",
        Failed = "Failed",
        NotSupported = "NotSupported",
        VersionMismatch = "VersionMismatch",
    }
}

ocpp_enum! {
    pub enum UpdateType {
        Differential = "Differential",
        Full = "Full",
    }
}
