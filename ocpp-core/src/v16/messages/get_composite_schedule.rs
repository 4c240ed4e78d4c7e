use chrono::{DateTime, Utc};

use super::super::types::{ChargingRateUnitType, ChargingSchedule, GetCompositeScheduleStatus};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetCompositeScheduleRequest {
        pub connector_id: i32 => req "connectorId" [min 0],
        /// Length of the requested schedule in seconds.
        pub duration: i32 => req "duration",
        pub charging_rate_unit: Option<ChargingRateUnitType> => opt "chargingRateUnit",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct GetCompositeScheduleResponse {
        pub status: GetCompositeScheduleStatus => req "status",
        pub connector_id: Option<i32> => opt "connectorId",
        pub schedule_start: Option<DateTime<Utc>> => opt "scheduleStart",
        pub charging_schedule: Option<ChargingSchedule> => opt "chargingSchedule",
    }
}
