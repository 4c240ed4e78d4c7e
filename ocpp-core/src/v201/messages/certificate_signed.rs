use super::super::types::{CertificateSignedStatus, CertificateSigningUse, CustomData, StatusInfo};

record! {
    /// PEM encoded chain, leaf first.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CertificateSignedRequest {
        pub certificate_chain: String => req "certificateChain" [max_len 10000],
        pub certificate_type: Option<CertificateSigningUse> => opt "certificateType",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CertificateSignedResponse {
        pub status: CertificateSignedStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
