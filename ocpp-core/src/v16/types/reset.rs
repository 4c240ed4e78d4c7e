ocpp_enum! {
    pub enum ResetType {
        Hard = "Hard",
        Soft = "Soft",
    }
}

ocpp_enum! {
    pub enum ResetStatus {
        Accepted = "Accepted",
        Rejected = "Rejected",
    }
}
