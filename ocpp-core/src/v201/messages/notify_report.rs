use chrono::{DateTime, Utc};

use super::super::types::{CustomData, ReportData};
use crate::set::OrderedSet;

record! {
    /// One part of a report; `tbc` marks that more parts follow.
    #[derive(Debug, Clone, PartialEq)]
    pub struct NotifyReportRequest {
        pub request_id: i32 => req "requestId",
        pub generated_at: DateTime<Utc> => req "generatedAt",
        pub report_data: Option<OrderedSet<ReportData>> => opt_set "reportData",
        pub tbc: Option<bool> => opt "tbc",
        pub seq_no: i32 => req "seqNo" [min 0],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct NotifyReportResponse {
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
