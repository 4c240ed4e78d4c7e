use chrono::{DateTime, Utc};

use super::super::types::RegistrationStatus;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct BootNotificationRequest {
        pub charge_point_vendor: String => req "chargePointVendor" [max_len 20],
        pub charge_point_model: String => req "chargePointModel" [max_len 20],
        pub charge_point_serial_number: Option<String> =>
            opt "chargePointSerialNumber" [max_len 25],
        pub charge_box_serial_number: Option<String> => opt "chargeBoxSerialNumber" [max_len 25],
        pub firmware_version: Option<String> => opt "firmwareVersion" [max_len 50],
        pub iccid: Option<String> => opt "iccid" [max_len 20],
        pub imsi: Option<String> => opt "imsi" [max_len 20],
        pub meter_type: Option<String> => opt "meterType" [max_len 25],
        pub meter_serial_number: Option<String> => opt "meterSerialNumber" [max_len 25],
    }
}

impl BootNotificationRequest {
    pub fn new(vendor: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            charge_point_vendor: vendor.into(),
            charge_point_model: model.into(),
            charge_point_serial_number: None,
            charge_box_serial_number: None,
            firmware_version: None,
            iccid: None,
            imsi: None,
            meter_type: None,
            meter_serial_number: None,
        }
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct BootNotificationResponse {
        pub status: RegistrationStatus => req "status",
        pub current_time: DateTime<Utc> => req "currentTime",
        /// Heartbeat interval in seconds, or the retry delay while not accepted.
        pub interval: i32 => req "interval",
    }
}
