//! Request/response envelopes around per-action payloads.

mod request;
mod response;

use std::fmt::Debug;

use crate::codec::Payload;

pub use request::{Request, DEFAULT_REQUEST_TIMEOUT};
pub use response::{Failure, Outcome, Response};

/// One OCPP operation: its wire name and its payload pair.
pub trait Action {
    const NAME: &'static str;
    type Request: Payload + Clone + Debug + PartialEq + Send + Sync + 'static;
    type Response: Payload + Clone + Debug + PartialEq + Send + Sync + 'static;
}
