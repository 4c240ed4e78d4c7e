use crate::config::ProtocolVersion;
use crate::error::{ParseError, ParseErrorKind};

/// Transport-level reasons for a call without reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportFailure {
    #[error("timed out waiting for the reply")]
    Timeout,
    #[error("peer is offline")]
    Offline,
    #[error("call was cancelled")]
    Cancelled,
    #[error("transport error")]
    General,
}

ocpp_enum! {
    /// RPC error codes of OCPP-J 1.6 and 2.0.1.
    pub enum ErrorCode {
        InternalError = "InternalError",
        ProtocolError = "ProtocolError",
        SecurityError = "SecurityError",
        /// 1.6 spelling of a syntactically broken payload.
        FormationViolation = "FormationViolation",
        /// 2.0.1 spelling of a syntactically broken payload.
        FormatViolation = "FormatViolation",
        PropertyConstraintViolation = "PropertyConstraintViolation",
        OccurrenceConstraintViolation = "OccurrenceConstraintViolation",
        TypeConstraintViolation = "TypeConstraintViolation",
        GenericError = "GenericError",
        NotImplemented = "NotImplemented",
        NotSupported = "NotSupported",
        MessageTypeNotSupported = "MessageTypeNotSupported",
        RpcFrameworkError = "RpcFrameworkError",
    }
}

impl ErrorCode {
    /// Code for a payload that is not well-formed in the given protocol version.
    pub fn format_violation(version: ProtocolVersion) -> Self {
        match version {
            ProtocolVersion::V201 => ErrorCode::FormatViolation,
            ProtocolVersion::V15 | ProtocolVersion::V16 => ErrorCode::FormationViolation,
        }
    }

    /// Code answering a payload that failed schema validation.
    pub fn for_parse_error(error: &ParseError) -> Self {
        match error.leaf().kind() {
            ParseErrorKind::MissingField | ParseErrorKind::Duplicate => {
                ErrorCode::OccurrenceConstraintViolation
            }
            _ => ErrorCode::PropertyConstraintViolation,
        }
    }
}
