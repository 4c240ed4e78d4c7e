//! Routing of inbound calls to a business handler.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::Arc;

use crate::codec::{Hooks, Payload};
use crate::envelope::Action;
use crate::error::{Error, ParseError};
use crate::format::error::ErrorCode;
use crate::ids::ChargeBoxId;
use crate::node::Record;
use crate::wire::{Codec, Outbound};

/// The inbound calls of one protocol version, keyed by action name.
///
/// Implemented by the enums generated with [`actions!`].
pub trait Catalogue: Sized + Debug {
    const ACTIONS: &'static [&'static str];

    fn decode(action: &str, record: &Record) -> Result<Self, Error>;

    fn action(&self) -> &'static str;

    fn to_record(&self) -> Record;

    fn supports(action: &str) -> bool {
        Self::ACTIONS.contains(&action)
    }
}

/// An action whose request is one of the calls in `C`.
pub trait Member<C>: Action {
    fn wrap(payload: Self::Request) -> C;
}

type Decoder<C> = Arc<dyn Fn(&Record) -> Result<C, ParseError> + Send + Sync>;

/// Per-action request codecs used instead of the plain field tables when
/// decoding inbound calls. Lets vendor fields in a request reach the handler.
pub struct InboundHooks<C> {
    decoders: HashMap<&'static str, Decoder<C>>,
}

impl<C: Catalogue> InboundHooks<C> {
    pub fn none() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Decodes requests of `A` through `hooks`, replacing any earlier entry for `A`.
    pub fn with_parser<A: Member<C>>(mut self, hooks: Hooks<A::Request>) -> Self {
        self.decoders.insert(
            A::NAME,
            Arc::new(move |record: &Record| hooks.parse(record).map(A::wrap)),
        );
        self
    }

    pub fn decode(&self, action: &str, record: &Record) -> Result<C, Error> {
        match self.decoders.get(action) {
            Some(decoder) => Ok(decoder(record)?),
            None => C::decode(action, record),
        }
    }
}

impl<C: Catalogue> Default for InboundHooks<C> {
    fn default() -> Self {
        Self::none()
    }
}

impl<C> Clone for InboundHooks<C> {
    fn clone(&self) -> Self {
        Self {
            decoders: self.decoders.clone(),
        }
    }
}

impl<C> fmt::Debug for InboundHooks<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.decoders.keys()).finish()
    }
}

/// A handler's reply payload, already written to the message tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    action: &'static str,
    record: Record,
}

impl Answer {
    pub fn new<A: Action>(payload: &A::Response) -> Self {
        Self {
            action: A::NAME,
            record: payload.to_record(),
        }
    }

    pub fn with_hooks<A: Action>(payload: &A::Response, hooks: &Hooks<A::Response>) -> Self {
        Self {
            action: A::NAME,
            record: hooks.serialize(payload),
        }
    }

    pub fn action(&self) -> &'static str {
        self.action
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}

/// A handler's refusal, sent back as an RPC error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {description}")]
pub struct Rejection {
    pub code: ErrorCode,
    pub description: String,
}

impl Rejection {
    pub fn new(code: ErrorCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

pub trait Handler<C> {
    fn handle(&mut self, identity: Option<&ChargeBoxId>, call: C) -> Result<Answer, Rejection>;
}

impl<C, F> Handler<C> for F
where
    F: FnMut(Option<&ChargeBoxId>, C) -> Result<Answer, Rejection>,
{
    fn handle(&mut self, identity: Option<&ChargeBoxId>, call: C) -> Result<Answer, Rejection> {
        self(identity, call)
    }
}

/// Decodes inbound calls, hands them to `H` and encodes the reply.
pub struct Dispatcher<C, H> {
    codec: Codec,
    handler: H,
    hooks: InboundHooks<C>,
    _catalogue: PhantomData<fn() -> C>,
}

impl<C: Catalogue, H: Handler<C>> Dispatcher<C, H> {
    pub fn new(codec: Codec, handler: H) -> Self {
        Self {
            codec,
            handler,
            hooks: InboundHooks::none(),
            _catalogue: PhantomData,
        }
    }

    pub fn with_hooks(mut self, hooks: InboundHooks<C>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Decodes inbound `A` requests through `hooks`.
    pub fn with_parser<A: Member<C>>(mut self, hooks: Hooks<A::Request>) -> Self {
        self.hooks = self.hooks.with_parser::<A>(hooks);
        self
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Answers one inbound message. Fails only when the reply cannot be encoded.
    pub fn dispatch(&mut self, bytes: &[u8]) -> Result<Outbound, Error> {
        let inbound = match self.codec.decode_call_with(bytes, &self.hooks) {
            Ok(inbound) => inbound,
            Err(e) => {
                return self.codec.encode_error(
                    e.request_id.as_deref(),
                    e.action.as_deref(),
                    e.code,
                    &e.description,
                )
            }
        };
        let action = inbound.call.action();
        let request_id = inbound.request_id;
        match self.handler.handle(inbound.identity.as_ref(), inbound.call) {
            Ok(answer) if answer.action() == action => {
                self.codec.encode_result(&request_id, action, answer.into_record())
            }
            Ok(answer) => {
                log::error!(
                    "handler answered {action} {request_id} with a {} response",
                    answer.action()
                );
                self.codec.encode_error(
                    Some(&request_id),
                    Some(action),
                    ErrorCode::InternalError,
                    "handler produced a response for another action",
                )
            }
            Err(rejection) => {
                log::warn!("handler rejected {action} {request_id}: {rejection}");
                self.codec.encode_error(
                    Some(&request_id),
                    Some(action),
                    rejection.code,
                    &rejection.description,
                )
            }
        }
    }
}
