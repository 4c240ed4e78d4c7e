use super::super::types::{
    CertificateHashDataChain, CustomData, GetCertificateIdUse, GetInstalledCertificateStatus, StatusInfo,
};
use crate::set::OrderedSet;

record! {
    /// Asking for the same certificate type twice is rejected.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub struct GetInstalledCertificateIdsRequest {
        pub certificate_type: Option<OrderedSet<GetCertificateIdUse>> =>
            opt_unique "certificateType",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct GetInstalledCertificateIdsResponse {
        pub status: GetInstalledCertificateStatus => req "status",
        pub status_info: Option<StatusInfo> => opt "statusInfo",
        pub certificate_hash_data_chain: Option<OrderedSet<CertificateHashDataChain>> =>
            opt_set "certificateHashDataChain",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
