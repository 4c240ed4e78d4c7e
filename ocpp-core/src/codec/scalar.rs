use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};

use super::{text, FromNode, ToNode};
use crate::error::ParseErrorKind;
use crate::node::Node;
use crate::set::OrderedSet;

fn invalid(expected: &str, node: &Node) -> ParseErrorKind {
    ParseErrorKind::InvalidValue(format!("expected {expected}, found {}", node.kind()))
}

impl FromNode for String {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        text(node).map(str::to_owned)
    }
}

impl ToNode for String {
    fn to_node(&self) -> Node {
        Node::String(self.clone())
    }
}

impl ToNode for str {
    fn to_node(&self) -> Node {
        Node::String(self.to_owned())
    }
}

impl FromNode for bool {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        match node {
            Node::Bool(b) => Ok(*b),
            Node::Text(t) => match t.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(ParseErrorKind::InvalidValue(format!(
                    "`{other}` is not a boolean"
                ))),
            },
            other => Err(invalid("boolean", other)),
        }
    }
}

impl ToNode for bool {
    fn to_node(&self) -> Node {
        Node::Bool(*self)
    }
}

macro_rules! integer {
    ($($ty:ty),+) => {
        $(
            impl FromNode for $ty {
                fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
                    match node {
                        Node::Number(n) => n
                            .as_i64()
                            .and_then(|v| <$ty>::try_from(v).ok())
                            .or_else(|| n.as_u64().and_then(|v| <$ty>::try_from(v).ok()))
                            .ok_or_else(|| {
                                ParseErrorKind::InvalidValue(format!(
                                    "{n} is not a valid {}",
                                    stringify!($ty)
                                ))
                            }),
                        Node::Text(t) => t.trim().parse::<$ty>().map_err(|_| {
                            ParseErrorKind::InvalidValue(format!(
                                "`{t}` is not a valid {}",
                                stringify!($ty)
                            ))
                        }),
                        other => Err(invalid("integer", other)),
                    }
                }
            }

            impl ToNode for $ty {
                fn to_node(&self) -> Node {
                    Node::Number(Number::from(*self))
                }
            }
        )+
    };
}

integer!(i32, i64, u32, u64);

impl FromNode for f64 {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        match node {
            Node::Number(n) => n
                .as_f64()
                .ok_or_else(|| ParseErrorKind::InvalidValue(format!("{n} is not a decimal"))),
            Node::Text(t) => t
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseErrorKind::InvalidValue(format!("`{t}` is not a decimal"))),
            other => Err(invalid("decimal", other)),
        }
    }
}

/// NaN and infinities have no JSON representation and become [`Node::Null`],
/// which the decoder then refuses. Outbound payloads are run through
/// [`Payload::validate`](super::Payload::validate) so such a value is reported
/// before it reaches the wire.
impl ToNode for f64 {
    fn to_node(&self) -> Node {
        Number::from_f64(*self).map(Node::Number).unwrap_or(Node::Null)
    }
}

impl FromNode for DateTime<Utc> {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        let raw = match node {
            Node::Text(t) => t.trim(),
            other => text(other)?,
        };
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| ParseErrorKind::InvalidValue(format!("`{raw}` is not an RFC 3339 date-time: {e}")))
    }
}

impl ToNode for DateTime<Utc> {
    fn to_node(&self) -> Node {
        Node::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Open JSON content (`anyType` in the schema).
impl FromNode for Value {
    fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
        Ok(node.to_json())
    }
}

impl ToNode for Value {
    fn to_node(&self) -> Node {
        Node::from_json(self)
    }
}

impl<T: ToNode> ToNode for OrderedSet<T> {
    fn to_node(&self) -> Node {
        Node::List(self.iter().map(ToNode::to_node).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn integers_reject_fractions_and_overflow() {
        assert_eq!(i32::from_node(&Node::Number(7.into())), Ok(7));
        assert!(i32::from_node(&Node::Number(Number::from_f64(1.5).unwrap())).is_err());
        assert!(i32::from_node(&Node::Number(Number::from(u64::MAX))).is_err());
        assert!(u32::from_node(&Node::Number((-1).into())).is_err());
        assert!(i32::from_node(&Node::String("7".into())).is_err());
        assert_eq!(i32::from_node(&Node::Text(" 7 ".into())), Ok(7));
    }

    #[test]
    fn typed_json_strings_are_not_coerced() {
        assert!(bool::from_node(&Node::String("true".into())).is_err());
        assert_eq!(bool::from_node(&Node::Text("true".into())), Ok(true));
        assert!(f64::from_node(&Node::String("1.5".into())).is_err());
        assert_eq!(f64::from_node(&Node::Text("1.5".into())), Ok(1.5));
    }

    #[test]
    fn date_times_round_trip() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let node = ts.to_node();
        assert_eq!(node, Node::String("2024-05-01T12:30:00Z".into()));
        assert_eq!(DateTime::<Utc>::from_node(&node), Ok(ts));
        assert_eq!(
            DateTime::<Utc>::from_node(&Node::String("2024-05-01T14:30:00+02:00".into())),
            Ok(ts)
        );
        assert!(DateTime::<Utc>::from_node(&Node::String("yesterday".into())).is_err());
    }

    #[test]
    fn only_xml_date_times_are_trimmed() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(
            DateTime::<Utc>::from_node(&Node::Text("\n  2024-05-01T12:30:00Z\n".into())),
            Ok(ts)
        );
        assert!(DateTime::<Utc>::from_node(&Node::String(" 2024-05-01T12:30:00Z".into())).is_err());
    }

    #[test]
    fn non_finite_decimals_have_no_node() {
        assert_eq!(f64::NAN.to_node(), Node::Null);
        assert_eq!(f64::INFINITY.to_node(), Node::Null);
        assert!(f64::from_node(&f64::NAN.to_node()).is_err());
    }
}
