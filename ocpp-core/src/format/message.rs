use serde_json::Value;

use super::error::ErrorCode;
use super::frame::{Call, CallError, CallResult};

const CALL: u64 = 2;
const CALL_RESULT: u64 = 3;
const CALL_ERROR: u64 = 4;

/// A frame that could not be decoded; `unique_id` is kept when it was readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Invalid {
    pub unique_id: Option<String>,
    pub message: String,
    pub err_msg: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallResponse {
    CallResult(CallResult),
    CallError(CallError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum OcppMessage {
    Call(Call),
    CallResponse(CallResponse),
    Invalid(Invalid),
}

pub trait EncodeDecode {
    fn encode(&self) -> String;
}

impl CallResponse {
    pub fn get_unique_id(&self) -> &str {
        match self {
            CallResponse::CallResult(t) => &t.unique_id,
            CallResponse::CallError(t) => &t.unique_id,
        }
    }

    pub fn encode(&self) -> String {
        match self {
            CallResponse::CallResult(t) => t.encode(),
            CallResponse::CallError(t) => t.encode(),
        }
    }
}

impl OcppMessage {
    pub fn decode_bytes(bytes: &[u8]) -> OcppMessage {
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::decode(text),
            Err(e) => OcppMessage::Invalid(Invalid {
                unique_id: None,
                message: String::from_utf8_lossy(bytes).into_owned(),
                err_msg: format!("frame is not UTF-8: {e}"),
            }),
        }
    }

    pub fn decode(message: &str) -> OcppMessage {
        let invalid = |unique_id: Option<String>, err_msg: String| {
            OcppMessage::Invalid(Invalid {
                unique_id,
                message: message.to_owned(),
                err_msg,
            })
        };

        let raw: Value = match serde_json::from_str(message) {
            Ok(val) => val,
            Err(e) => return invalid(None, format!("JSON parse error: {e}")),
        };

        let arr = match raw {
            Value::Array(arr) => arr,
            _ => return invalid(None, "Expected JSON array".into()),
        };

        let unique_id = arr.get(1).and_then(Value::as_str).map(str::to_owned);

        match arr.first().and_then(Value::as_u64) {
            Some(CALL) if arr.len() == 4 => {
                let action = arr[2].as_str().map(str::to_owned);
                match (unique_id, action) {
                    (Some(unique_id), Some(action)) => OcppMessage::Call(Call {
                        unique_id,
                        action,
                        payload: arr[3].clone(),
                    }),
                    (unique_id, _) => invalid(unique_id, "Invalid Call structure".into()),
                }
            }

            Some(CALL_RESULT) if arr.len() == 3 => match unique_id {
                Some(unique_id) => OcppMessage::CallResponse(CallResponse::CallResult(CallResult {
                    unique_id,
                    payload: arr[2].clone(),
                })),
                None => invalid(None, "Invalid CallResult structure".into()),
            },

            Some(CALL_ERROR) if arr.len() == 5 => {
                let error_code = arr[2].as_str().and_then(|code| code.parse::<ErrorCode>().ok());
                let error_description = arr[3].as_str().map(str::to_owned);
                match (unique_id, error_code, error_description) {
                    (Some(unique_id), Some(error_code), Some(error_description)) => {
                        OcppMessage::CallResponse(CallResponse::CallError(CallError {
                            unique_id,
                            error_code,
                            error_description,
                            error_details: arr[4].clone(),
                        }))
                    }
                    (unique_id, _, _) => invalid(unique_id, "Invalid CallError structure".into()),
                }
            }

            _ => invalid(unique_id, "Unknown or malformed message".into()),
        }
    }
}

impl EncodeDecode for Call {
    fn encode(&self) -> String {
        Value::Array(vec![
            Value::from(CALL),
            Value::from(self.unique_id.as_str()),
            Value::from(self.action.as_str()),
            self.payload.clone(),
        ])
        .to_string()
    }
}

impl EncodeDecode for CallResult {
    fn encode(&self) -> String {
        Value::Array(vec![
            Value::from(CALL_RESULT),
            Value::from(self.unique_id.as_str()),
            self.payload.clone(),
        ])
        .to_string()
    }
}

impl EncodeDecode for CallError {
    fn encode(&self) -> String {
        Value::Array(vec![
            Value::from(CALL_ERROR),
            Value::from(self.unique_id.as_str()),
            Value::from(self.error_code.as_str()),
            Value::from(self.error_description.as_str()),
            self.error_details.clone(),
        ])
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_round_trip() {
        let call = Call {
            unique_id: "msg-123".into(),
            action: "Heartbeat".into(),
            payload: json!({}),
        };
        let text = call.encode();
        assert_eq!(text, r#"[2,"msg-123","Heartbeat",{}]"#);
        assert_eq!(OcppMessage::decode(&text), OcppMessage::Call(call));
    }

    #[test]
    fn call_error_parsing() {
        let msg = OcppMessage::decode(r#"[4, "msg-123", "NotImplemented", "Action not supported", {}]"#);
        match msg {
            OcppMessage::CallResponse(CallResponse::CallError(error)) => {
                assert_eq!(error.unique_id, "msg-123");
                assert_eq!(error.error_code, ErrorCode::NotImplemented);
            }
            other => panic!("expected CallError, got {other:?}"),
        }
    }

    #[test]
    fn invalid_frames_keep_unique_id() {
        match OcppMessage::decode(r#"[2, "msg-9", 17, {}]"#) {
            OcppMessage::Invalid(invalid) => assert_eq!(invalid.unique_id.as_deref(), Some("msg-9")),
            other => panic!("expected Invalid, got {other:?}"),
        }
        assert!(matches!(OcppMessage::decode("{}"), OcppMessage::Invalid(_)));
        assert!(matches!(OcppMessage::decode("[7, \"x\"]"), OcppMessage::Invalid(_)));
        assert!(matches!(OcppMessage::decode_bytes(&[0xff, 0xfe]), OcppMessage::Invalid(_)));
    }
}
