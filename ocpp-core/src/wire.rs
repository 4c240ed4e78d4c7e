//! Ties envelopes to a concrete wire format.
//!
//! [`Codec`] turns a [`Request`] into bytes and the peer's bytes back into a
//! [`Response`], and decodes inbound calls for a [`Catalogue`]. The same field
//! tables are used for both formats; only the framing differs.

use serde_json::Value;

use crate::codec::{Hooks, Payload};
use crate::config::{CodecConfig, ProtocolVersion, SoapConfig};
use crate::dispatch::{Catalogue, InboundHooks};
use crate::envelope::{Action, Failure, Request, Response};
use crate::error::Error;
use crate::format::error::ErrorCode;
use crate::format::frame::{Call, CallError, CallResult};
use crate::format::message::{CallResponse, EncodeDecode, OcppMessage};
use crate::ids::{ChargeBoxId, RequestId};
use crate::node::Record;
use crate::soap::{self, SoapBody, SoapEnvelope, SoapHeader};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// OCPP-J: JSON payloads in RPC frames.
    #[default]
    Json,
    /// SOAP 1.2 envelopes.
    Soap,
}

/// Bytes ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub action: String,
    pub request_id: String,
    pub bytes: Vec<u8>,
}

/// A decoded inbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct Inbound<C> {
    /// Frame unique id, or the SOAP `MessageID` verbatim.
    pub request_id: String,
    /// `chargeBoxIdentity` header; OCPP-J carries the identity in the connection URL.
    pub identity: Option<ChargeBoxId>,
    pub call: C,
}

/// An inbound call that cannot be handed to the business layer, with the code to answer it with.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundError {
    pub request_id: Option<String>,
    pub action: Option<String>,
    pub code: ErrorCode,
    pub description: String,
}

/// A reply before its payload is checked against a response schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Result {
        request_id: Option<String>,
        /// Known for SOAP, where the body element names the action.
        action: Option<String>,
        record: Record,
    },
    Error {
        request_id: Option<String>,
        code: ErrorCode,
        description: String,
        details: Value,
    },
}

const UUID_URN: &str = "urn:uuid:";
/// Unique id used in a CallError when the offending frame had none.
const UNKNOWN_ID: &str = "-1";

fn correlation_id(raw: &str) -> &str {
    raw.strip_prefix(UUID_URN).unwrap_or(raw)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Codec {
    format: WireFormat,
    version: ProtocolVersion,
    soap: SoapConfig,
}

impl Codec {
    pub fn new(format: WireFormat, version: ProtocolVersion) -> Self {
        Self {
            format,
            version,
            soap: SoapConfig::default(),
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.format, config.version).with_soap(config.soap.clone())
    }

    pub fn with_soap(mut self, soap: SoapConfig) -> Self {
        self.soap = soap;
        self
    }

    pub fn format(&self) -> WireFormat {
        self.format
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    fn namespace(&self, peer: bool) -> Result<&'static str, Error> {
        let service = if peer { self.soap.service.peer() } else { self.soap.service };
        soap::namespace(self.version, service)
            .ok_or_else(|| Error::Soap(format!("{:?} has no SOAP binding", self.version)))
    }

    fn soap_header(&self) -> SoapHeader {
        SoapHeader {
            from: self.soap.from.clone(),
            to: self.soap.to.clone(),
            ..SoapHeader::default()
        }
    }

    pub fn encode_request<A: Action>(
        &self,
        request: &Request<A>,
        hooks: &Hooks<A::Request>,
    ) -> Result<Outbound, Error> {
        request.payload().validate()?;
        let record = request.to_record(hooks);
        let request_id = request.request_id().to_string();
        let bytes = match self.format {
            WireFormat::Json => Call {
                unique_id: request_id.clone(),
                action: A::NAME.to_owned(),
                payload: record.to_json(),
            }
            .encode(),
            WireFormat::Soap => SoapEnvelope {
                header: SoapHeader {
                    charge_box_identity: Some(request.target().clone()),
                    action: Some(format!("/{}", A::NAME)),
                    message_id: Some(format!("{UUID_URN}{request_id}")),
                    ..self.soap_header()
                },
                body: SoapBody::Request {
                    action: A::NAME.to_owned(),
                    payload: record,
                },
            }
            .encode(self.namespace(true)?),
        };
        log::debug!("encoded {} request {request_id}", A::NAME);
        Ok(Outbound {
            action: A::NAME.to_owned(),
            request_id,
            bytes: bytes.into_bytes(),
        })
    }

    /// Encodes a successful reply to the inbound call `request_id`.
    pub fn encode_result(
        &self,
        request_id: &str,
        action: &str,
        record: Record,
    ) -> Result<Outbound, Error> {
        let bytes = match self.format {
            WireFormat::Json => CallResult::new(request_id.to_owned(), record.to_json()).encode(),
            WireFormat::Soap => SoapEnvelope {
                header: SoapHeader {
                    action: Some(format!("/{action}Response")),
                    message_id: Some(format!("{UUID_URN}{}", RequestId::random())),
                    relates_to: Some(request_id.to_owned()),
                    ..self.soap_header()
                },
                body: SoapBody::Response {
                    action: action.to_owned(),
                    payload: record,
                },
            }
            .encode(self.namespace(false)?),
        };
        log::debug!("encoded {action} result for {request_id}");
        Ok(Outbound {
            action: action.to_owned(),
            request_id: request_id.to_owned(),
            bytes: bytes.into_bytes(),
        })
    }

    /// Encodes an RPC error (OCPP-J) or a fault (SOAP).
    pub fn encode_error(
        &self,
        request_id: Option<&str>,
        action: Option<&str>,
        code: ErrorCode,
        description: &str,
    ) -> Result<Outbound, Error> {
        let request_id = request_id.unwrap_or(UNKNOWN_ID);
        let bytes = match self.format {
            WireFormat::Json => CallError::new(request_id.to_owned(), code)
                .with_description(description)
                .encode(),
            WireFormat::Soap => SoapEnvelope {
                header: SoapHeader {
                    action: action.map(|action| format!("/{action}Response")),
                    message_id: Some(format!("{UUID_URN}{}", RequestId::random())),
                    relates_to: Some(request_id.to_owned()),
                    ..self.soap_header()
                },
                body: SoapBody::Fault {
                    code,
                    reason: description.to_owned(),
                },
            }
            .encode(self.namespace(false)?),
        };
        log::debug!("encoded {code} error for {request_id}");
        Ok(Outbound {
            action: action.unwrap_or_default().to_owned(),
            request_id: request_id.to_owned(),
            bytes: bytes.into_bytes(),
        })
    }

    /// Decodes an inbound call into the catalogue `C`.
    pub fn decode_call<C: Catalogue>(&self, bytes: &[u8]) -> Result<Inbound<C>, InboundError> {
        self.decode_call_with(bytes, &InboundHooks::none())
    }

    /// [`Codec::decode_call`] with per-action parser hooks.
    pub fn decode_call_with<C: Catalogue>(
        &self,
        bytes: &[u8],
        hooks: &InboundHooks<C>,
    ) -> Result<Inbound<C>, InboundError> {
        let (request_id, identity, action, record) = match self.format {
            WireFormat::Json => self.split_json_call(bytes)?,
            WireFormat::Soap => self.split_soap_call(bytes)?,
        };
        if !C::supports(&action) {
            return Err(reject(
                Some(request_id),
                Some(action.clone()),
                ErrorCode::NotImplemented,
                format!("action {action} is not implemented"),
            ));
        }
        match hooks.decode(&action, &record) {
            Ok(call) => {
                log::debug!("decoded {action} call {request_id}");
                Ok(Inbound {
                    request_id,
                    identity,
                    call,
                })
            }
            Err(e) => {
                let code = match &e {
                    Error::Parse(parse) => ErrorCode::for_parse_error(parse),
                    Error::UnknownAction(_) => ErrorCode::NotImplemented,
                    _ => ErrorCode::format_violation(self.version),
                };
                Err(reject(Some(request_id), Some(action), code, e.to_string()))
            }
        }
    }

    fn split_json_call(
        &self,
        bytes: &[u8],
    ) -> Result<(String, Option<ChargeBoxId>, String, Record), InboundError> {
        match OcppMessage::decode_bytes(bytes) {
            OcppMessage::Call(call) => match call.payload {
                Value::Object(map) => Ok((
                    call.unique_id,
                    None,
                    call.action,
                    Record::from_json_map(&map),
                )),
                _ => Err(reject(
                    Some(call.unique_id),
                    Some(call.action),
                    ErrorCode::format_violation(self.version),
                    "payload is not a JSON object".into(),
                )),
            },
            OcppMessage::CallResponse(response) => Err(reject(
                Some(response.get_unique_id().to_owned()),
                None,
                ErrorCode::ProtocolError,
                "expected a Call frame".into(),
            )),
            OcppMessage::Invalid(invalid) => Err(reject(
                invalid.unique_id,
                None,
                ErrorCode::format_violation(self.version),
                invalid.err_msg,
            )),
        }
    }

    fn split_soap_call(
        &self,
        bytes: &[u8],
    ) -> Result<(String, Option<ChargeBoxId>, String, Record), InboundError> {
        let format_violation = |description: String| {
            reject(None, None, ErrorCode::format_violation(self.version), description)
        };
        let text = std::str::from_utf8(bytes).map_err(|e| format_violation(e.to_string()))?;
        let envelope = SoapEnvelope::decode(text).map_err(|e| format_violation(e.to_string()))?;
        let header = envelope.header;
        match envelope.body {
            SoapBody::Request { action, payload } => match header.message_id {
                Some(message_id) => Ok((message_id, header.charge_box_identity, action, payload)),
                None => Err(reject(
                    None,
                    Some(action),
                    ErrorCode::ProtocolError,
                    "request carries no MessageID".into(),
                )),
            },
            SoapBody::Response { action, .. } => Err(reject(
                header.message_id,
                Some(action),
                ErrorCode::ProtocolError,
                "expected a request body".into(),
            )),
            SoapBody::Fault { .. } => Err(reject(
                header.message_id,
                None,
                ErrorCode::ProtocolError,
                "expected a request body, found a fault".into(),
            )),
        }
    }

    /// Decodes a reply frame without interpreting its payload.
    pub fn decode_reply(&self, bytes: &[u8]) -> Result<Reply, Error> {
        match self.format {
            WireFormat::Json => match OcppMessage::decode_bytes(bytes) {
                OcppMessage::CallResponse(CallResponse::CallResult(result)) => match result.payload {
                    Value::Object(map) => Ok(Reply::Result {
                        request_id: Some(result.unique_id),
                        action: None,
                        record: Record::from_json_map(&map),
                    }),
                    _ => Err(Error::Frame("CallResult payload is not an object".into())),
                },
                OcppMessage::CallResponse(CallResponse::CallError(error)) => Ok(Reply::Error {
                    request_id: Some(error.unique_id),
                    code: error.error_code,
                    description: error.error_description,
                    details: error.error_details,
                }),
                OcppMessage::Call(call) => Err(Error::Frame(format!(
                    "expected a reply, found a {} call",
                    call.action
                ))),
                OcppMessage::Invalid(invalid) => Err(Error::Frame(invalid.err_msg)),
            },
            WireFormat::Soap => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| Error::Soap(format!("envelope is not UTF-8: {e}")))?;
                let envelope = SoapEnvelope::decode(text)?;
                let request_id = envelope.header.relates_to;
                match envelope.body {
                    SoapBody::Response { action, payload } => Ok(Reply::Result {
                        request_id,
                        action: Some(action),
                        record: payload,
                    }),
                    SoapBody::Fault { code, reason } => Ok(Reply::Error {
                        request_id,
                        code,
                        description: reason,
                        details: Value::Object(Default::default()),
                    }),
                    SoapBody::Request { action, .. } => Err(Error::Soap(format!(
                        "expected a response, found a {action} request"
                    ))),
                }
            }
        }
    }

    /// Decodes the peer's reply to `request`. Every failure ends up in the outcome.
    pub fn decode_response<'r, A: Action>(
        &self,
        bytes: &[u8],
        request: &'r Request<A>,
        hooks: &Hooks<A::Response>,
    ) -> Response<'r, A> {
        let reply = match self.decode_reply(bytes) {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("undecodable reply to {} {}: {e}", A::NAME, request.request_id());
                return Response::failed(request, Failure::Format(e.to_string()));
            }
        };
        let (Reply::Result { request_id, .. } | Reply::Error { request_id, .. }) = &reply;
        if let Some(id) = request_id {
            if correlation_id(id) != request.request_id().as_str() {
                log::warn!("reply {id} does not belong to request {}", request.request_id());
                return Response::failed(
                    request,
                    Failure::Format(format!(
                        "reply {id} does not correlate with request {}",
                        request.request_id()
                    )),
                );
            }
        }
        match reply {
            Reply::Result { action, record, .. } => match action {
                Some(action) if action != A::NAME => Response::failed(
                    request,
                    Failure::Format(format!("expected {} response, found {action}", A::NAME)),
                ),
                _ => Response::from_record(&record, request, hooks),
            },
            Reply::Error {
                code,
                description,
                details,
                ..
            } => {
                log::debug!("{} {} answered with {code}", A::NAME, request.request_id());
                Response::failed(
                    request,
                    Failure::Server {
                        code,
                        description,
                        details,
                    },
                )
            }
        }
    }
}

fn reject(
    request_id: Option<String>,
    action: Option<String>,
    code: ErrorCode,
    description: String,
) -> InboundError {
    log::warn!(
        "rejecting inbound {} {}: {code} {description}",
        action.as_deref().unwrap_or("message"),
        request_id.as_deref().unwrap_or(UNKNOWN_ID)
    );
    InboundError {
        request_id,
        action,
        code,
        description,
    }
}
