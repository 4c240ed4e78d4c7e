use super::CustomData;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Modem {
        pub iccid: Option<String> => opt "iccid" [max_len 20],
        pub imsi: Option<String> => opt "imsi" [max_len 20],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct ChargingStation {
        pub serial_number: Option<String> => opt "serialNumber" [max_len 25],
        pub model: String => req "model" [max_len 20],
        pub modem: Option<Modem> => opt "modem",
        pub vendor_name: String => req "vendorName" [max_len 50],
        pub firmware_version: Option<String> => opt "firmwareVersion" [max_len 50],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl ChargingStation {
    pub fn new(vendor_name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            serial_number: None,
            model: model.into(),
            modem: None,
            vendor_name: vendor_name.into(),
            firmware_version: None,
            custom_data: None,
        }
    }
}

record! {
    /// An EVSE, optionally narrowed to one of its connectors. Id 0 is the whole station.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Evse {
        pub id: i32 => req "id" [min 0],
        pub connector_id: Option<i32> => opt "connectorId",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl Evse {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            connector_id: None,
            custom_data: None,
        }
    }
}
