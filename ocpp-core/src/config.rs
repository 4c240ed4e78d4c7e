use std::time::Duration;

use crate::error::Error;
use crate::wire::WireFormat;

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProtocolVersion {
    V15,
    #[default]
    V16,
    V201,
}

/// Which SOAP service an endpoint implements; selects the OCPP namespace.
#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SoapService {
    #[default]
    CentralSystem,
    ChargePoint,
}

impl SoapService {
    /// The service on the other end of the connection.
    pub fn peer(self) -> Self {
        match self {
            SoapService::CentralSystem => SoapService::ChargePoint,
            SoapService::ChargePoint => SoapService::CentralSystem,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SoapConfig {
    pub service: SoapService,
    /// WS-Addressing `From` address of this endpoint.
    pub from: Option<String>,
    /// WS-Addressing `To` address of the remote endpoint.
    pub to: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    pub format: WireFormat,
    pub version: ProtocolVersion,
    /// Milliseconds to wait for a correlated reply.
    pub call_timeout: u64,
    pub soap: SoapConfig,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: WireFormat::Json,
            version: ProtocolVersion::V16,
            call_timeout: 30_000,
            soap: SoapConfig::default(),
        }
    }
}

impl CodecConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = CodecConfig::from_json_str(r#"{"format":"Soap","soap":{"service":"ChargePoint"}}"#).unwrap();
        assert_eq!(config.format, WireFormat::Soap);
        assert_eq!(config.version, ProtocolVersion::V16);
        assert_eq!(config.call_timeout(), Duration::from_secs(30));
        assert_eq!(config.soap.service, SoapService::ChargePoint);
        assert_eq!(config.soap.to, None);
    }

    #[test]
    fn rejects_unknown_versions() {
        assert!(CodecConfig::from_json_str(r#"{"version":"V20"}"#).is_err());
    }
}
