use super::super::types::{CustomData, GenericDeviceModelStatus, ReportBase, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetBaseReportRequest {
        pub request_id: i32 => req "requestId",
        pub report_base: ReportBase => req "reportBase",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetBaseReportResponse {
        pub status: GenericDeviceModelStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
