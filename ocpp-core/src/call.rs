//! Drives one request over a transport and folds every way it can end into a [`Response`].

use crate::codec::Hooks;
use crate::envelope::{Action, Failure, Request, Response};
use crate::error::Error;
use crate::format::error::TransportFailure;
use crate::wire::{Codec, Outbound};

/// Sends an encoded request and resolves with the raw correlated reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn exchange(&self, message: Outbound) -> Result<Vec<u8>, TransportFailure>;
}

/// Hooks applied to both directions of one action.
pub struct CallHooks<A: Action> {
    pub request: Hooks<A::Request>,
    pub response: Hooks<A::Response>,
}

impl<A: Action> Default for CallHooks<A> {
    fn default() -> Self {
        Self {
            request: Hooks::none(),
            response: Hooks::none(),
        }
    }
}

impl<A: Action> Clone for CallHooks<A> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            response: self.response.clone(),
        }
    }
}

/// Sends `request` and waits for its reply, its timeout or its cancellation.
///
/// Only a request that cannot be encoded is an error; everything after that is
/// reported through the response outcome.
pub async fn call<'r, A: Action, T: Transport>(
    transport: &T,
    codec: &Codec,
    request: &'r Request<A>,
    hooks: &CallHooks<A>,
) -> Result<Response<'r, A>, Error> {
    if request.is_cancelled() {
        log::debug!("{} {} cancelled before sending", A::NAME, request.request_id());
        return Ok(Response::failed(request, Failure::Transport(TransportFailure::Cancelled)));
    }
    let outbound = codec.encode_request(request, &hooks.request)?;
    let exchange = tokio::time::timeout(request.timeout(), transport.exchange(outbound));

    let reply = tokio::select! {
        biased;
        _ = request.cancellation().cancelled() => Err(TransportFailure::Cancelled),
        reply = exchange => reply.unwrap_or(Err(TransportFailure::Timeout)),
    };

    Ok(match reply {
        Ok(bytes) => codec.decode_response(&bytes, request, &hooks.response),
        Err(failure) => {
            log::warn!("{} {} failed: {failure}", A::NAME, request.request_id());
            Response::failed(request, Failure::Transport(failure))
        }
    })
}
