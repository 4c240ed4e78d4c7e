use super::{CustomData, GetCertificateIdUse, HashAlgorithm};
use crate::set::OrderedSet;

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct OcspRequestData {
        pub hash_algorithm: HashAlgorithm => req "hashAlgorithm",
        pub issuer_name_hash: String => req "issuerNameHash" [max_len 128],
        pub issuer_key_hash: String => req "issuerKeyHash" [max_len 128],
        pub serial_number: String => req "serialNumber" [max_len 40],
        pub responder_url: String => req "responderURL" [max_len 512],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    /// Identifies an installed certificate by issuer hashes and serial number.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CertificateHashData {
        pub hash_algorithm: HashAlgorithm => req "hashAlgorithm",
        pub issuer_name_hash: String => req "issuerNameHash" [max_len 128],
        pub issuer_key_hash: String => req "issuerKeyHash" [max_len 128],
        pub serial_number: String => req "serialNumber" [max_len 40],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}

record! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct CertificateHashDataChain {
        pub certificate_type: GetCertificateIdUse => req "certificateType",
        pub certificate_hash_data: CertificateHashData => req "certificateHashData",
        pub child_certificate_hash_data: Option<OrderedSet<CertificateHashData>> =>
            opt_set "childCertificateHashData" [max_items 4],
        pub custom_data: Option<CustomData> => opt "customData",
    }
}
