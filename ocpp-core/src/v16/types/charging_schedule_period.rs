record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct ChargingSchedulePeriod {
        /// Seconds from the start of the schedule.
        pub start_period: i32 => req "startPeriod" [min 0],
        pub limit: f64 => req "limit",
        pub number_phases: Option<i32> => opt "numberPhases",
    }
}
