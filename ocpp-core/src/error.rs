use crate::ids::IdError;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("missing mandatory field")]
    MissingField,
    #[error("invalid value: {0}")]
    InvalidValue(String),
    #[error("{0}")]
    Nested(Box<ParseError>),
    #[error("duplicate element where unique elements are required")]
    Duplicate,
}

/// A failed parse, attached to the field it failed on.
///
/// Nested objects wrap the inner failure, so the full path to the offending
/// field is available through [`ParseError::path`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {kind}")]
pub struct ParseError {
    field: String,
    kind: ParseErrorKind,
}

/// Field name used for failures that concern the payload object itself.
pub const PAYLOAD: &str = "payload";

impl ParseError {
    pub fn new(field: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ParseErrorKind::MissingField)
    }

    pub fn invalid(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(field, ParseErrorKind::InvalidValue(detail.into()))
    }

    pub fn nested(field: impl Into<String>, inner: ParseError) -> Self {
        Self::new(field, ParseErrorKind::Nested(Box::new(inner)))
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The innermost failure, following nested objects.
    pub fn leaf(&self) -> &ParseError {
        match &self.kind {
            ParseErrorKind::Nested(inner) => inner.leaf(),
            _ => self,
        }
    }

    /// Dotted path to the failing field, e.g. `chargingProfile.chargingSchedule[0].startPeriod`.
    pub fn path(&self) -> String {
        match &self.kind {
            ParseErrorKind::Nested(inner) => format!("{}.{}", self.field, inner.path()),
            _ => self.field.clone(),
        }
    }
}

/// Crate-level error for boundary calls that bundle syntax and schema failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed SOAP envelope: {0}")]
    Soap(String),

    #[error("malformed RPC frame: {0}")]
    Frame(String),

    #[error("unknown action `{0}`")]
    UnknownAction(String),

    #[error(transparent)]
    Identifier(#[from] IdError),
}
