use super::super::types::{CertificateHashData, CustomData, DeleteCertificateStatus, StatusInfo};

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DeleteCertificateRequest {
        pub certificate_hash_data: CertificateHashData => req "certificateHashData",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DeleteCertificateResponse {
        pub status: DeleteCertificateStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
