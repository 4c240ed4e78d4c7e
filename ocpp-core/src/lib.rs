//! OCPP message envelope and codec framework.
//!
//! Every OCPP payload is described once, as a declarative field table
//! ([`record!`]), and read or written through a format-neutral tree
//! ([`node::Record`]). Two wire back-ends sit on top of that tree:
//!
//! - [`format`]: OCPP-J RPC frames carrying JSON payloads (1.6-J, 2.0.1)
//! - [`soap`]: SOAP 1.2 envelopes for the legacy 1.5/1.6 SOAP profile
//!
//! [`envelope`] wraps payloads with protocol metadata (request id, timestamps,
//! timeout, cancellation) and carries the outcome of a call, [`wire::Codec`]
//! ties envelopes to a wire format, [`dispatch`] routes inbound calls to a
//! business handler and [`call`] drives a request over a [`call::Transport`].

#[macro_use]
mod macros;

pub mod call;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod format;
pub mod ids;
pub mod node;
pub mod set;
pub mod soap;
pub mod v16;
pub mod v201;
pub mod wire;

pub use codec::{FieldReader, FieldWriter, FromNode, Hooks, Payload, ToNode};
pub use config::{CodecConfig, ProtocolVersion, SoapConfig, SoapService};
pub use envelope::{Action, Failure, Outcome, Request, Response};
pub use error::{Error, ParseError, ParseErrorKind};
pub use ids::{ChargeBoxId, EventTrackingId, IdError, RequestId, TransactionId};
pub use node::{Node, Placement, Record};
pub use set::OrderedSet;
pub use wire::{Codec, WireFormat};
