use super::CustomData;

record! {
    /// Free-form explanation of a response status.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct StatusInfo {
        pub reason_code: String => req "reasonCode" [max_len 20],
        pub additional_info: Option<String> => opt "additionalInfo" [max_len 512],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

impl StatusInfo {
    pub fn new(reason_code: impl Into<String>) -> Self {
        Self {
            reason_code: reason_code.into(),
            additional_info: None,
            custom_data: None,
        }
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}
