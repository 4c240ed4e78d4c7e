use chrono::{DateTime, Utc};

use super::{ChargingProfileKind, ChargingProfilePurpose, ChargingRateUnit, CustomData, RecurrencyKind};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingSchedulePeriod {
        pub start_period: i32 => req "startPeriod" [min 0],
        pub limit: f64 => req "limit",
        pub number_phases: Option<i32> => opt "numberPhases" [min 0, max 3],
        pub phase_to_use: Option<i32> => opt "phaseToUse" [min 0, max 3],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingSchedule {
        pub id: i32 => req "id",
        pub start_schedule: Option<DateTime<Utc>> => opt "startSchedule",
        pub duration: Option<i32> => opt "duration",
        pub charging_rate_unit: ChargingRateUnit => req "chargingRateUnit",
        pub charging_schedule_period: OrderedSet<ChargingSchedulePeriod> =>
            set "chargingSchedulePeriod" [max_items 1024],
        pub min_charging_rate: Option<f64> => opt "minChargingRate",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingProfile {
        pub id: i32 => req "id",
        pub stack_level: i32 => req "stackLevel" [min 0],
        pub charging_profile_purpose: ChargingProfilePurpose => req "chargingProfilePurpose",
        pub charging_profile_kind: ChargingProfileKind => req "chargingProfileKind",
        pub recurrency_kind: Option<RecurrencyKind> => opt "recurrencyKind",
        pub valid_from: Option<DateTime<Utc>> => opt "validFrom",
        pub valid_to: Option<DateTime<Utc>> => opt "validTo",
        pub transaction_id: Option<String> => opt "transactionId" [max_len 36],
        pub charging_schedule: OrderedSet<ChargingSchedule> => set "chargingSchedule" [max_items 3],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    /// Selects the profiles a ClearChargingProfile request removes.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct ChargingProfileCriterion {
        pub evse_id: Option<i32> => opt "evseId" [min 0],
        pub charging_profile_purpose: Option<ChargingProfilePurpose> =>
            opt "chargingProfilePurpose",
        pub stack_level: Option<i32> => opt "stackLevel" [min 0],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
