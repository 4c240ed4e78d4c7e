#![allow(dead_code)]

pub mod transport;

use std::fmt::Debug;
use std::sync::Once;

use log::LevelFilter;
use rocpp_codec::{ChargeBoxId, Payload};
use serde_json::Value;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

pub fn charge_box() -> ChargeBoxId {
    ChargeBoxId::new("CP-0001").unwrap()
}

/// Decodes `raw`, checks that it encodes back to the same JSON and that the
/// re-encoded form decodes to an equal value.
pub fn json_round_trip<P: Payload + PartialEq + Debug>(label: &str, raw: &Value) -> P {
    let payload = P::try_from_json(raw).unwrap_or_else(|e| panic!("{label}: {e}"));
    let encoded = payload.to_json();
    assert_eq!(&encoded, raw, "{label}: re-encoded JSON differs");
    let decoded = P::try_from_json(&encoded).unwrap_or_else(|e| panic!("{label}: {e}"));
    assert_eq!(decoded, payload, "{label}: decoded value differs");
    payload
}
