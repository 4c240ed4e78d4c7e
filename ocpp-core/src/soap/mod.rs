//! SOAP 1.2 binding of OCPP 1.5 and 1.6.
//!
//! Payloads use the same [`crate::node::Record`] tree as OCPP-J. XML values
//! arrive as untyped text and are coerced by the field decoders.

pub mod envelope;
pub mod xml;

use crate::config::{ProtocolVersion, SoapService};

pub use envelope::{SoapBody, SoapEnvelope, SoapHeader, SOAP_ENV_NS, WSA_NS};

/// OCPP target namespace of a service, `None` for versions without a SOAP binding.
pub fn namespace(version: ProtocolVersion, service: SoapService) -> Option<&'static str> {
    match (version, service) {
        (ProtocolVersion::V15, SoapService::CentralSystem) => Some("urn://Ocpp/Cs/2012/06/"),
        (ProtocolVersion::V15, SoapService::ChargePoint) => Some("urn://Ocpp/Cp/2012/06/"),
        (ProtocolVersion::V16, SoapService::CentralSystem) => Some("urn://Ocpp/Cs/2015/10/"),
        (ProtocolVersion::V16, SoapService::ChargePoint) => Some("urn://Ocpp/Cp/2015/10/"),
        (ProtocolVersion::V201, _) => None,
    }
}
