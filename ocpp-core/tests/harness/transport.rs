use std::sync::Mutex;
use std::time::Duration;

use rocpp_codec::call::Transport;
use rocpp_codec::format::error::TransportFailure;
use rocpp_codec::wire::Outbound;

type Responder = Box<dyn Fn(&Outbound) -> Vec<u8> + Send + Sync>;

enum Behaviour {
    Reply(Responder),
    Fail(TransportFailure),
    Delay(Duration, Responder),
    Hang,
}

/// Answers every exchange the same way and records what was sent.
pub struct MockTransport {
    behaviour: Behaviour,
    sent: Mutex<Vec<Outbound>>,
}

impl MockTransport {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(responder: impl Fn(&Outbound) -> Vec<u8> + Send + Sync + 'static) -> Self {
        Self::with(Behaviour::Reply(Box::new(responder)))
    }

    /// Replies with an OCPP-J CallResult carrying `payload` and the request's id.
    pub fn call_result(payload: &'static str) -> Self {
        Self::replying(move |out| format!(r#"[3,"{}",{payload}]"#, out.request_id).into_bytes())
    }

    pub fn failing(failure: TransportFailure) -> Self {
        Self::with(Behaviour::Fail(failure))
    }

    pub fn delayed(delay: Duration, responder: impl Fn(&Outbound) -> Vec<u8> + Send + Sync + 'static) -> Self {
        Self::with(Behaviour::Delay(delay, Box::new(responder)))
    }

    pub fn hanging() -> Self {
        Self::with(Behaviour::Hang)
    }

    pub fn sent(&self) -> Vec<Outbound> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn exchange(&self, message: Outbound) -> Result<Vec<u8>, TransportFailure> {
        log::info!("[MSG_OUT] {}", String::from_utf8_lossy(&message.bytes));
        self.sent.lock().unwrap().push(message.clone());
        match &self.behaviour {
            Behaviour::Reply(responder) => Ok(responder(&message)),
            Behaviour::Fail(failure) => Err(*failure),
            Behaviour::Delay(delay, responder) => {
                tokio::time::sleep(*delay).await;
                Ok(responder(&message))
            }
            Behaviour::Hang => std::future::pending().await,
        }
    }
}
