mod harness;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use harness::init_logger;
use rocpp_codec::dispatch::{Answer, Catalogue, Dispatcher, Handler, InboundHooks, Rejection};
use rocpp_codec::format::error::ErrorCode;
use rocpp_codec::v16::messages::*;
use rocpp_codec::v16::{self, Heartbeat};
use rocpp_codec::wire::Reply;
use rocpp_codec::{v201, ChargeBoxId, Codec, Hooks, Node, ProtocolVersion, WireFormat};
use serde_json::{json, Value};

fn json_codec(version: ProtocolVersion) -> Codec {
    Codec::new(WireFormat::Json, version)
}

fn error_code<C: Catalogue>(raw: &str, version: ProtocolVersion) -> ErrorCode {
    match json_codec(version).decode_call::<C>(raw.as_bytes()) {
        Ok(inbound) => panic!("{raw} should have been rejected, decoded {:?}", inbound.call),
        Err(e) => e.code,
    }
}

#[test]
fn decodes_a_json_call() {
    init_logger();
    let inbound = json_codec(ProtocolVersion::V16)
        .decode_call::<v16::Call>(br#"[2,"m-1","Heartbeat",{}]"#)
        .unwrap();
    assert_eq!(inbound.request_id, "m-1");
    assert_eq!(inbound.identity, None);
    assert_eq!(inbound.call, v16::Call::Heartbeat(HeartbeatRequest {}));
}

#[test]
fn inbound_failures_map_to_rpc_error_codes() {
    init_logger();
    let json16 = ProtocolVersion::V16;
    assert_eq!(error_code::<v16::Call>(r#"[2,"1","Teleport",{}]"#, json16), ErrorCode::NotImplemented);
    assert_eq!(
        error_code::<v16::Call>(r#"[2,"2","BootNotification",{"chargePointVendor":"V"}]"#, json16),
        ErrorCode::OccurrenceConstraintViolation
    );
    assert_eq!(
        error_code::<v16::Call>(
            r#"[2,"3","BootNotification",{"chargePointVendor":"V","chargePointModel":5}]"#,
            json16
        ),
        ErrorCode::PropertyConstraintViolation
    );
    assert_eq!(error_code::<v16::Call>(r#"[2,"4","Heartbeat",[]]"#, json16), ErrorCode::FormationViolation);
    assert_eq!(error_code::<v16::Call>("not json", json16), ErrorCode::FormationViolation);
    assert_eq!(error_code::<v16::Call>(r#"[3,"5",{}]"#, json16), ErrorCode::ProtocolError);

    let json201 = ProtocolVersion::V201;
    assert_eq!(error_code::<v201::Call>(r#"[2,"6","Heartbeat",[]]"#, json201), ErrorCode::FormatViolation);
    assert_eq!(error_code::<v201::Call>(r#"[2,"7","StartTransaction",{}]"#, json201), ErrorCode::NotImplemented);
    assert_eq!(
        error_code::<v201::Call>(r#"[2,"8","ClearVariableMonitoring",{"id":[]}]"#, json201),
        ErrorCode::PropertyConstraintViolation
    );
}

#[test]
fn rejection_keeps_the_request_id() {
    init_logger();
    let err = json_codec(ProtocolVersion::V16)
        .decode_call::<v16::Call>(br#"[2,"keep-me","Teleport",{}]"#)
        .unwrap_err();
    assert_eq!(err.request_id.as_deref(), Some("keep-me"));
    assert_eq!(err.action.as_deref(), Some("Teleport"));
}

fn heartbeat_answer() -> Answer {
    Answer::new::<Heartbeat>(&HeartbeatResponse {
        current_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    })
}

fn frame(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn dispatcher_answers_with_a_call_result() -> Result<()> {
    init_logger();
    let mut dispatcher: Dispatcher<v16::Call, _> = Dispatcher::new(
        json_codec(ProtocolVersion::V16),
        |_: Option<&ChargeBoxId>, call: v16::Call| match call {
            v16::Call::Heartbeat(_) => Ok(heartbeat_answer()),
            other => Err(Rejection::new(ErrorCode::NotSupported, format!("{} is not handled", other.action()))),
        },
    );

    let out = dispatcher.dispatch(br#"[2,"hb-1","Heartbeat",{}]"#)?;
    assert_eq!(out.request_id, "hb-1");
    assert_eq!(frame(&out.bytes), json!([3, "hb-1", {"currentTime": "2024-01-01T00:00:00Z"}]));

    let reply = dispatcher.codec().decode_reply(&out.bytes)?;
    assert!(matches!(reply, Reply::Result { request_id: Some(id), .. } if id == "hb-1"));
    Ok(())
}

#[test]
fn dispatcher_reports_rejections_and_bad_input() -> Result<()> {
    init_logger();
    let mut dispatcher: Dispatcher<v16::Call, _> = Dispatcher::new(
        json_codec(ProtocolVersion::V16),
        |_: Option<&ChargeBoxId>, _: v16::Call| -> Result<Answer, Rejection> {
            Err(Rejection::new(ErrorCode::SecurityError, "not allowed"))
        },
    );

    let out = dispatcher.dispatch(br#"[2,"r-1","ClearCache",{}]"#)?;
    assert_eq!(frame(&out.bytes), json!([4, "r-1", "SecurityError", "not allowed", {}]));

    let out = dispatcher.dispatch(br#"[2,"r-2","BootNotification",{}]"#)?;
    let value = frame(&out.bytes);
    assert_eq!(value[1], "r-2");
    assert_eq!(value[2], "OccurrenceConstraintViolation");

    let out = dispatcher.dispatch(b"[2,")?;
    assert_eq!(frame(&out.bytes)[1], "-1");
    Ok(())
}

#[test]
fn answer_for_another_action_is_an_internal_error() -> Result<()> {
    init_logger();
    let mut dispatcher: Dispatcher<v16::Call, _> = Dispatcher::new(
        json_codec(ProtocolVersion::V16),
        |_: Option<&ChargeBoxId>, _: v16::Call| -> Result<Answer, Rejection> { Ok(heartbeat_answer()) },
    );
    let out = dispatcher.dispatch(br#"[2,"w-1","ClearCache",{}]"#)?;
    let value = frame(&out.bytes);
    assert_eq!(value[0], 4);
    assert_eq!(value[2], "InternalError");
    Ok(())
}

#[derive(Default)]
struct Counting {
    boots: usize,
}

impl Handler<v16::Call> for Counting {
    fn handle(&mut self, _: Option<&ChargeBoxId>, call: v16::Call) -> Result<Answer, Rejection> {
        match call {
            v16::Call::BootNotification(request) => {
                self.boots += 1;
                log::info!("boot from {}", request.charge_point_vendor);
                Ok(Answer::new::<v16::BootNotification>(&BootNotificationResponse {
                    status: rocpp_codec::v16::types::RegistrationStatus::Accepted,
                    current_time: Utc::now(),
                    interval: 60,
                }))
            }
            other => Err(Rejection::new(ErrorCode::NotImplemented, other.action())),
        }
    }
}

#[test]
fn stateful_handler() -> Result<()> {
    init_logger();
    let mut dispatcher: Dispatcher<v16::Call, Counting> =
        Dispatcher::new(json_codec(ProtocolVersion::V16), Counting::default());
    let boot = br#"[2,"b-1","BootNotification",{"chargePointVendor":"V","chargePointModel":"M"}]"#;
    dispatcher.dispatch(boot)?;
    dispatcher.dispatch(boot)?;
    assert_eq!(dispatcher.handler().boots, 2);
    dispatcher.handler_mut().boots = 0;
    assert_eq!(dispatcher.into_handler().boots, 0);
    Ok(())
}

#[test]
fn error_codes_keep_their_wire_spelling() -> Result<()> {
    init_logger();
    let codec = json_codec(ProtocolVersion::V201);
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        let out = codec.encode_error(Some("e-1"), None, *code, "boom")?;
        assert_eq!(frame(&out.bytes)[2], code.as_str());
        match codec.decode_reply(&out.bytes)? {
            Reply::Error { code: decoded, .. } => assert_eq!(decoded, *code),
            other => panic!("expected an error reply, got {other:?}"),
        }
    }
    assert!("formatViolation".parse::<ErrorCode>().is_err());
    Ok(())
}

fn vendor_firmware() -> Hooks<BootNotificationRequest> {
    Hooks::none().with_parser(|record, mut request: BootNotificationRequest| {
        if let Some(Node::String(firmware)) = record.get("vendorFirmware") {
            request.firmware_version = Some(firmware.clone());
        }
        request
    })
}

#[test]
fn inbound_parser_hooks_apply_per_action() {
    init_logger();
    let hooks = InboundHooks::<v16::Call>::none().with_parser::<v16::BootNotification>(vendor_firmware());
    let codec = json_codec(ProtocolVersion::V16);

    let raw = br#"[2,"b-1","BootNotification",{"chargePointVendor":"V","chargePointModel":"M","vendorFirmware":"9.9"}]"#;
    let inbound = codec.decode_call_with(raw, &hooks).unwrap();
    match inbound.call {
        v16::Call::BootNotification(request) => {
            assert_eq!(request.firmware_version.as_deref(), Some("9.9"))
        }
        other => panic!("decoded {other:?}"),
    }

    let plain = codec.decode_call::<v16::Call>(raw).unwrap();
    assert!(matches!(plain.call, v16::Call::BootNotification(r) if r.firmware_version.is_none()));

    let heartbeat = codec.decode_call_with(br#"[2,"h-1","Heartbeat",{}]"#, &hooks).unwrap();
    assert_eq!(heartbeat.call, v16::Call::Heartbeat(HeartbeatRequest {}));

    let err = codec
        .decode_call_with(br#"[2,"b-2","BootNotification",{"vendorFirmware":"9.9"}]"#, &hooks)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::OccurrenceConstraintViolation);
}

#[derive(Default)]
struct FirmwareLog {
    seen: Vec<Option<String>>,
}

impl Handler<v16::Call> for FirmwareLog {
    fn handle(&mut self, _: Option<&ChargeBoxId>, call: v16::Call) -> Result<Answer, Rejection> {
        match call {
            v16::Call::BootNotification(request) => {
                self.seen.push(request.firmware_version);
                Ok(Answer::new::<v16::BootNotification>(&BootNotificationResponse {
                    status: rocpp_codec::v16::types::RegistrationStatus::Accepted,
                    current_time: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
                    interval: 300,
                }))
            }
            other => Err(Rejection::new(ErrorCode::NotImplemented, other.action())),
        }
    }
}

#[test]
fn dispatcher_hands_hooked_requests_to_the_handler() -> Result<()> {
    init_logger();
    let mut dispatcher: Dispatcher<v16::Call, FirmwareLog> =
        Dispatcher::new(json_codec(ProtocolVersion::V16), FirmwareLog::default())
            .with_parser::<v16::BootNotification>(vendor_firmware());

    let out = dispatcher.dispatch(
        br#"[2,"b-1","BootNotification",{"chargePointVendor":"V","chargePointModel":"M","vendorFirmware":"2.1"}]"#,
    )?;
    assert_eq!(frame(&out.bytes)[0], 3);

    let out = dispatcher.dispatch(br#"[2,"b-2","BootNotification",{"vendorFirmware":"2.1"}]"#)?;
    assert_eq!(frame(&out.bytes)[2], "OccurrenceConstraintViolation");

    assert_eq!(dispatcher.handler().seen, vec![Some("2.1".to_owned())]);
    Ok(())
}
