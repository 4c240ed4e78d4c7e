ocpp_enum! {
    pub enum ChargingProfileKindType {
        Absolute = "Absolute",
        Recurring = "Recurring",
        Relative = "Relative",
    }
}

ocpp_enum! {
    pub enum ChargingProfilePurposeType {
        ChargePointMaxProfile = "ChargePointMaxProfile",
        TxDefaultProfile = "TxDefaultProfile",
        TxProfile = "TxProfile",
    }
}

ocpp_enum! {
    pub enum RecurrencyKindType {
        Daily = "Daily",
        Weekly = "Weekly",
    }
}

ocpp_enum! {
    pub enum ChargingRateUnitType {
        W = "W",
        A = "A",
    }
}
