use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{Action, Request};
use crate::codec::Hooks;
use crate::error::{Error, ParseError};
use crate::format::error::{ErrorCode, TransportFailure};
use crate::node::Record;

/// Why a call produced no payload.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Failure {
    /// The reply arrived but did not match the response schema.
    #[error("malformed response: {0}")]
    Format(String),
    /// The remote party answered with an RPC error or SOAP fault.
    #[error("server failure {code}: {description}")]
    Server {
        code: ErrorCode,
        description: String,
        details: Value,
    },
    #[error("transport failure: {0}")]
    Transport(TransportFailure),
}

/// Result of a call. A payload exists only on success.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<P> {
    Ok(P),
    Failed(Failure),
}

impl<P> Outcome<P> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            Outcome::Ok(payload) => Some(payload),
            Outcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<P, Failure> {
        match self {
            Outcome::Ok(payload) => Ok(payload),
            Outcome::Failed(failure) => Err(failure),
        }
    }
}

/// The answer to a [`Request`], borrowing the request it correlates to.
#[derive(Debug, Clone)]
pub struct Response<'r, A: Action> {
    request: &'r Request<A>,
    outcome: Outcome<A::Response>,
    received: DateTime<Utc>,
}

impl<'r, A: Action> Response<'r, A> {
    pub fn accepted(request: &'r Request<A>, payload: A::Response) -> Self {
        Self {
            request,
            outcome: Outcome::Ok(payload),
            received: Utc::now(),
        }
    }

    pub fn failed(request: &'r Request<A>, failure: Failure) -> Self {
        Self {
            request,
            outcome: Outcome::Failed(failure),
            received: Utc::now(),
        }
    }

    /// Parses a response payload with the caller's hooks applied last.
    pub fn try_parse(
        record: &Record,
        request: &'r Request<A>,
        hooks: &Hooks<A::Response>,
    ) -> Result<Self, ParseError> {
        hooks
            .parse(record)
            .map(|payload| Self::accepted(request, payload))
    }

    /// [`Response::try_parse`] with the failure converted into [`Error`].
    pub fn parse(
        record: &Record,
        request: &'r Request<A>,
        hooks: &Hooks<A::Response>,
    ) -> Result<Self, Error> {
        Ok(Self::try_parse(record, request, hooks)?)
    }

    /// Like [`Response::try_parse`], but a schema violation becomes a
    /// [`Failure::Format`] outcome instead of an error.
    pub fn from_record(
        record: &Record,
        request: &'r Request<A>,
        hooks: &Hooks<A::Response>,
    ) -> Self {
        match Self::try_parse(record, request, hooks) {
            Ok(response) => response,
            Err(e) => {
                log::warn!(
                    "{} response to {} failed validation: {e}",
                    A::NAME,
                    request.request_id()
                );
                Self::failed(request, Failure::Format(e.to_string()))
            }
        }
    }

    pub fn request(&self) -> &'r Request<A> {
        self.request
    }

    pub fn outcome(&self) -> &Outcome<A::Response> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Outcome<A::Response> {
        self.outcome
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn payload(&self) -> Option<&A::Response> {
        self.outcome.payload()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.outcome.failure()
    }

    pub fn received(&self) -> DateTime<Utc> {
        self.received
    }

    /// Time between sending the request and receiving this response.
    pub fn runtime(&self) -> chrono::Duration {
        self.received - self.request.timestamp()
    }

    pub fn to_record(&self, hooks: &Hooks<A::Response>) -> Option<Record> {
        self.payload().map(|payload| hooks.serialize(payload))
    }
}
