//! Validated protocol identifiers.

use std::fmt;
use std::str::FromStr;

use crate::codec::{self, FromNode, ToNode};
use crate::error::ParseErrorKind;
use crate::node::Node;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} exceeds {max} characters")]
    TooLong { kind: &'static str, max: usize },
}

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub const MAX_LEN: usize = $max;

            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                if value.is_empty() {
                    return Err(IdError::Empty { kind: stringify!($name) });
                }
                if value.chars().count() > Self::MAX_LEN {
                    return Err(IdError::TooLong {
                        kind: stringify!($name),
                        max: Self::MAX_LEN,
                    });
                }
                Ok(Self(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromNode for $name {
            fn from_node(node: &Node) -> Result<Self, ParseErrorKind> {
                let raw = codec::text(node)?;
                Self::new(raw).map_err(|e| ParseErrorKind::InvalidValue(e.to_string()))
            }
        }

        impl ToNode for $name {
            fn to_node(&self) -> Node {
                Node::String(self.0.clone())
            }
        }
    };
}

identifier!(
    /// Identity of a charging station, used to route and correlate messages.
    ChargeBoxId,
    48
);

identifier!(
    /// Correlation id of an RPC call (OCPP-J message id, WS-Addressing MessageID).
    RequestId,
    36
);

identifier!(
    /// Transaction id assigned by the charging station (2.0.1).
    TransactionId,
    36
);

identifier!(
    /// Id that follows one logical operation across log lines and retries.
    EventTrackingId,
    64
);

impl RequestId {
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl EventTrackingId {
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_oversized() {
        assert_eq!(ChargeBoxId::new(""), Err(IdError::Empty { kind: "ChargeBoxId" }));
        assert!(ChargeBoxId::new("x".repeat(48)).is_ok());
        assert_eq!(
            ChargeBoxId::new("x".repeat(49)),
            Err(IdError::TooLong {
                kind: "ChargeBoxId",
                max: 48
            })
        );
    }

    #[test]
    fn random_ids_are_valid_and_distinct() {
        let a = RequestId::random();
        let b = RequestId::random();
        assert_ne!(a, b);
        assert!(RequestId::new(a.as_str()).is_ok());
    }

    #[test]
    fn transaction_id_from_node() {
        let id = TransactionId::from_node(&Node::String("tx-1".into())).unwrap();
        assert_eq!(id.as_str(), "tx-1");
        assert!(TransactionId::from_node(&Node::String(String::new())).is_err());
        assert!(TransactionId::from_node(&Node::Bool(true)).is_err());
    }
}
