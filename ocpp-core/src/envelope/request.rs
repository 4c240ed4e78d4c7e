use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use super::Action;
use crate::codec::Hooks;
use crate::config::CodecConfig;
use crate::ids::{ChargeBoxId, EventTrackingId, RequestId};
use crate::node::Record;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An outgoing call: payload plus the metadata needed to correlate its reply.
///
/// Cancellation is a shared flag. Clones of a request observe the same flag,
/// so the transport can poll it while the caller holds another handle.
#[derive(Debug, Clone)]
pub struct Request<A: Action> {
    target: ChargeBoxId,
    payload: A::Request,
    request_id: RequestId,
    timestamp: DateTime<Utc>,
    timeout: Duration,
    event_tracking_id: EventTrackingId,
    cancellation: CancellationToken,
}

impl<A: Action> Request<A> {
    pub fn new(target: ChargeBoxId, payload: A::Request) -> Self {
        Self {
            target,
            payload,
            request_id: RequestId::random(),
            timestamp: Utc::now(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            event_tracking_id: EventTrackingId::random(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn from_config(target: ChargeBoxId, payload: A::Request, config: &CodecConfig) -> Self {
        Self::new(target, payload).with_timeout(config.call_timeout())
    }

    /// Reuses a known request id, e.g. when replaying a call after reconnect.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_event_tracking_id(mut self, event_tracking_id: EventTrackingId) -> Self {
        self.event_tracking_id = event_tracking_id;
        self
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    pub fn action(&self) -> &'static str {
        A::NAME
    }

    pub fn target(&self) -> &ChargeBoxId {
        &self.target
    }

    pub fn payload(&self) -> &A::Request {
        &self.payload
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Point in time after which the transport reports a timeout.
    pub fn deadline(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.timeout)
            .ok()
            .and_then(|t| self.timestamp.checked_add_signed(t))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn event_tracking_id(&self) -> &EventTrackingId {
        &self.event_tracking_id
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn to_record(&self, hooks: &Hooks<A::Request>) -> Record {
        hooks.serialize(&self.payload)
    }
}
