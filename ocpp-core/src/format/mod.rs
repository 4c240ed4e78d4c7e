//! OCPP-J RPC framing: `[2, id, action, payload]`, `[3, id, payload]`,
//! `[4, id, code, description, details]`.

pub mod error;
pub mod frame;
pub mod message;
