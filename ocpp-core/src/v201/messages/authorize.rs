use super::super::types::{
    AuthorizeCertificateStatus, CustomData, IdToken, IdTokenInfo, OcspRequestData,
};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizeRequest {
        pub id_token: IdToken => req "idToken",
        pub certificate: Option<String> => opt "certificate" [max_len 5500],
        pub iso15118_certificate_hash_data: Option<OrderedSet<OcspRequestData>> =>
            opt_set "iso15118CertificateHashData" [max_items 4],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AuthorizeResponse {
        pub id_token_info: IdTokenInfo => req "idTokenInfo",
        pub certificate_status: Option<AuthorizeCertificateStatus> => opt "certificateStatus",
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
