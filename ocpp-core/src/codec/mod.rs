//! Generic payload codec driven by per-message field tables.
//!
//! A payload type implements [`Payload`] (usually through [`record!`]): it reads
//! itself from a [`FieldReader`] and writes itself into a [`FieldWriter`].
//! Scalars and nested values go through [`FromNode`] / [`ToNode`].

pub mod check;
mod fields;
mod scalar;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, ParseError, ParseErrorKind, PAYLOAD};
use crate::node::{Node, Record};

pub use fields::{FieldReader, FieldWriter};

/// Decodes a value from a tree node.
pub trait FromNode: Sized {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind>;
}

/// Encodes a value into a tree node.
pub trait ToNode {
    fn to_node(&self) -> Node;
}

/// A message payload or nested object with a fixed field table.
pub trait Payload: Sized {
    fn read(fields: &FieldReader<'_>) -> Result<Self, ParseError>;

    fn write(&self, fields: &mut FieldWriter);

    fn try_parse(record: &Record) -> Result<Self, ParseError> {
        Self::read(&FieldReader::new(record))
    }

    /// [`Payload::try_parse`] with the failure converted into [`Error`].
    fn parse(record: &Record) -> Result<Self, Error> {
        Ok(Self::try_parse(record)?)
    }

    fn to_record(&self) -> Record {
        let mut fields = FieldWriter::new();
        self.write(&mut fields);
        fields.finish()
    }

    fn try_from_json(value: &Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(map) => Self::try_parse(&Record::from_json_map(map)),
            other => Err(ParseError::invalid(
                PAYLOAD,
                format!("expected object, found {}", Node::from_json(other).kind()),
            )),
        }
    }

    fn from_json(value: &Value) -> Result<Self, Error> {
        Ok(Self::try_from_json(value)?)
    }

    fn from_json_str(raw: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }

    fn to_json(&self) -> Value {
        self.to_record().to_json()
    }

    /// Checks that the serialized form would be accepted by this type's own
    /// decoder, catching values built in code that break a constraint.
    fn validate(&self) -> Result<(), ParseError> {
        Self::try_parse(&self.to_record()).map(drop)
    }
}

/// Decodes a nested object, wrapping its failure so the caller can attach the field name.
pub fn nested<T: Payload>(node: &Node) -> Result<T, ParseErrorKind> {
    let empty;
    let record = match node {
        Node::Record(record) => record,
        // `<customData/>` and friends arrive from XML as empty text
        Node::Text(text) if text.trim().is_empty() => {
            empty = Record::lexical();
            &empty
        }
        other => {
            return Err(ParseErrorKind::InvalidValue(format!(
                "expected object, found {}",
                other.kind()
            )))
        }
    };
    T::try_parse(record).map_err(|e| ParseErrorKind::Nested(Box::new(e)))
}

/// Borrows the character data of a string-like node.
pub fn text(node: &Node) -> Result<&str, ParseErrorKind> {
    match node {
        Node::String(s) | Node::Text(s) => Ok(s),
        other => Err(ParseErrorKind::InvalidValue(format!(
            "expected string, found {}",
            other.kind()
        ))),
    }
}

pub type ParseHook<P> = Arc<dyn Fn(&Record, P) -> P + Send + Sync>;
pub type SerializeHook<P> = Arc<dyn Fn(&P, Record) -> Record + Send + Sync>;

/// Vendor extension points around a payload codec.
///
/// The parser hook runs only after the standard field table has validated the
/// input; the serializer hook runs after the standard fields were written.
pub struct Hooks<P> {
    parser: Option<ParseHook<P>>,
    serializer: Option<SerializeHook<P>>,
}

impl<P> Hooks<P> {
    pub fn none() -> Self {
        Self {
            parser: None,
            serializer: None,
        }
    }

    pub fn with_parser(mut self, hook: impl Fn(&Record, P) -> P + Send + Sync + 'static) -> Self {
        self.parser = Some(Arc::new(hook));
        self
    }

    pub fn with_serializer(
        mut self,
        hook: impl Fn(&P, Record) -> Record + Send + Sync + 'static,
    ) -> Self {
        self.serializer = Some(Arc::new(hook));
        self
    }
}

impl<P: Payload> Hooks<P> {
    pub fn parse(&self, record: &Record) -> Result<P, ParseError> {
        let payload = P::try_parse(record)?;
        Ok(match &self.parser {
            Some(hook) => {
                log::trace!("applying custom parser hook");
                hook(record, payload)
            }
            None => payload,
        })
    }

    pub fn serialize(&self, payload: &P) -> Record {
        let record = payload.to_record();
        match &self.serializer {
            Some(hook) => {
                log::trace!("applying custom serializer hook");
                hook(payload, record)
            }
            None => record,
        }
    }
}

impl<P> Default for Hooks<P> {
    fn default() -> Self {
        Self::none()
    }
}

impl<P> Clone for Hooks<P> {
    fn clone(&self) -> Self {
        Self {
            parser: self.parser.clone(),
            serializer: self.serializer.clone(),
        }
    }
}

impl<P> fmt::Debug for Hooks<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("parser", &self.parser.is_some())
            .field("serializer", &self.serializer.is_some())
            .finish()
    }
}
