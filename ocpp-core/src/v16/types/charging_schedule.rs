use chrono::{DateTime, Utc};

use super::{
    ChargingProfileKindType, ChargingProfilePurposeType, ChargingRateUnitType, ChargingSchedulePeriod, RecurrencyKindType,
};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingSchedule {
        pub duration: Option<i32> => opt "duration",
        pub start_schedule: Option<DateTime<Utc>> => opt "startSchedule",
        pub charging_rate_unit: ChargingRateUnitType => req "chargingRateUnit",
        pub charging_schedule_period: OrderedSet<ChargingSchedulePeriod> =>
            set "chargingSchedulePeriod",
        pub min_charging_rate: Option<f64> => opt "minChargingRate",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingProfile {
        pub charging_profile_id: i32 => req "chargingProfileId",
        pub transaction_id: Option<i32> => opt "transactionId",
        pub stack_level: i32 => req "stackLevel" [min 0],
        pub charging_profile_purpose: ChargingProfilePurposeType => req "chargingProfilePurpose",
        pub charging_profile_kind: ChargingProfileKindType => req "chargingProfileKind",
        pub recurrency_kind: Option<RecurrencyKindType> => opt "recurrencyKind",
        pub valid_from: Option<DateTime<Utc>> => opt "validFrom",
        pub valid_to: Option<DateTime<Utc>> => opt "validTo",
        pub charging_schedule: ChargingSchedule => req "chargingSchedule",
    }
}
