mod harness;

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use harness::{charge_box, init_logger};
use rocpp_codec::dispatch::Catalogue;
use rocpp_codec::error::ParseErrorKind;
use rocpp_codec::format::error::ErrorCode;
use rocpp_codec::v201::messages::*;
use rocpp_codec::v201::types::*;
use rocpp_codec::v201::{Call, MeterValues};
use rocpp_codec::{Codec, Error, Hooks, Payload, ProtocolVersion, Record, Request, WireFormat};
use serde_json::json;

#[test]
fn status_only_response_round_trips_exactly() {
    init_logger();
    let raw = json!({"status": "Accepted"});
    let response = ClearCacheResponse::try_from_json(&raw).unwrap();
    assert_eq!(response.status, ClearCacheStatus::Accepted);
    assert_eq!(response.to_json(), raw);
}

#[test]
fn status_info_equals_a_constructed_value() {
    init_logger();
    let response = ClearCacheResponse::try_from_json(&json!({
        "status": "Rejected",
        "statusInfo": {"reasonCode": "OK"}
    }))
    .unwrap();
    assert_eq!(
        response,
        ClearCacheResponse {
            status: ClearCacheStatus::Rejected,
            status_info: Some(StatusInfo::new("OK")),
            custom_data: None,
        }
    );

    let long = ClearCacheResponse::try_from_json(&json!({
        "status": "Rejected",
        "statusInfo": {"reasonCode": "x".repeat(21)}
    }))
    .unwrap_err();
    assert_eq!(long.path(), "statusInfo.reasonCode");
}

#[test]
fn empty_monitoring_id_list_is_rejected() {
    init_logger();
    let err = ClearVariableMonitoringRequest::try_from_json(&json!({"id": []})).unwrap_err();
    assert_eq!(err.field(), "id");
    assert_eq!(
        ErrorCode::for_parse_error(&err),
        ErrorCode::PropertyConstraintViolation
    );
}

#[test]
fn duplicate_monitoring_ids_collapse() {
    init_logger();
    let request = ClearVariableMonitoringRequest::try_from_json(&json!({"id": [3, 1, 3]})).unwrap();
    assert_eq!(request.id.len(), 2);
    assert_eq!(request.to_json(), json!({"id": [3, 1]}));
    assert_eq!(
        request,
        ClearVariableMonitoringRequest::try_from_json(&json!({"id": [1, 3]})).unwrap()
    );
}

#[test]
fn duplicate_certificate_types_are_rejected() {
    init_logger();
    let err = GetInstalledCertificateIdsRequest::try_from_json(&json!({
        "certificateType": ["V2GRootCertificate", "MORootCertificate", "V2GRootCertificate"]
    }))
    .unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::Duplicate);
    assert_eq!(
        ErrorCode::for_parse_error(&err),
        ErrorCode::OccurrenceConstraintViolation
    );

    let ok = GetInstalledCertificateIdsRequest::try_from_json(&json!({
        "certificateType": ["V2GRootCertificate", "MORootCertificate"]
    }))
    .unwrap();
    assert_eq!(ok.certificate_type.map(|types| types.len()), Some(2));
    assert_eq!(
        GetInstalledCertificateIdsRequest::try_from_json(&json!({})).unwrap(),
        GetInstalledCertificateIdsRequest::default()
    );
}

fn boot_json() -> serde_json::Value {
    json!({
        "chargingStation": {
            "model": "SingleSocketCharger",
            "vendorName": "VendorX",
            "serialNumber": "SN-1"
        },
        "reason": "PowerUp"
    })
}

#[test]
fn removing_a_mandatory_field_fails_with_its_name() {
    init_logger();
    let mut raw = boot_json();
    raw.as_object_mut().unwrap().remove("reason");
    let err = BootNotificationRequest::try_from_json(&raw).unwrap_err();
    assert_eq!(err.field(), "reason");
    assert_eq!(err.kind(), &ParseErrorKind::MissingField);

    let mut raw = boot_json();
    raw["chargingStation"].as_object_mut().unwrap().remove("vendorName");
    let err = BootNotificationRequest::try_from_json(&raw).unwrap_err();
    assert_eq!(err.path(), "chargingStation.vendorName");
    assert_eq!(err.leaf().kind(), &ParseErrorKind::MissingField);
}

#[test]
fn removing_an_optional_field_still_parses() {
    init_logger();
    let mut raw = boot_json();
    raw["chargingStation"].as_object_mut().unwrap().remove("serialNumber");
    let request = BootNotificationRequest::try_from_json(&raw).unwrap();
    assert_eq!(request.charging_station, ChargingStation::new("VendorX", "SingleSocketCharger"));
    assert_eq!(request.reason, BootReason::PowerUp);
}

#[test]
fn custom_data_survives_a_round_trip() {
    init_logger();
    let raw = json!({
        "status": "Accepted",
        "customData": {"vendorId": "com.acme", "slot": 4, "labels": ["a", "b"]}
    });
    let response = ClearCacheResponse::try_from_json(&raw).unwrap();
    let custom = response.custom_data.as_ref().unwrap();
    assert_eq!(custom.vendor_id(), "com.acme");
    assert_eq!(custom.get("slot"), Some(&json!(4)));
    assert_eq!(response.to_json(), raw);

    let built = CustomData::new("com.acme")
        .unwrap()
        .with("slot", 4)
        .with("labels", json!(["a", "b"]));
    assert_eq!(custom, &built);

    let err = ClearCacheResponse::try_from_json(&json!({"status": "Accepted", "customData": {}})).unwrap_err();
    assert_eq!(err.path(), "customData.vendorId");
}

#[test]
fn payloads_hash_as_sets() {
    init_logger();
    let a = ClearVariableMonitoringRequest::try_from_json(&json!({"id": [1, 2, 3]})).unwrap();
    let b = ClearVariableMonitoringRequest::try_from_json(&json!({"id": [3, 2, 1, 2]})).unwrap();
    let c = ClearVariableMonitoringRequest::try_from_json(&json!({"id": [1, 2]})).unwrap();
    let set: HashSet<_> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn boot_notification_response_round_trip() {
    init_logger();
    let raw = json!({
        "currentTime": "2024-05-01T12:00:00Z",
        "interval": 300,
        "status": "Pending",
        "statusInfo": {"reasonCode": "Busy", "additionalInfo": "retry later"}
    });
    let response = BootNotificationResponse::try_from_json(&raw).unwrap();
    assert_eq!(response.status, RegistrationStatus::Pending);
    assert_eq!(
        response.status_info,
        Some(StatusInfo::new("Busy").with_additional_info("retry later"))
    );
    assert_eq!(response.to_json(), raw);
}

#[test]
fn catalogue_routes_by_action_name() {
    init_logger();
    let call = Call::decode("Heartbeat", &Record::new()).unwrap();
    assert_eq!(call.action(), "Heartbeat");
    assert!(Call::supports("TransactionEvent"));
    assert!(!Call::supports("StartTransaction"));
    assert!(matches!(
        Call::decode("StartTransaction", &Record::new()),
        Err(Error::UnknownAction(_))
    ));

    let record = Record::from_json_map(boot_json().as_object().unwrap());
    let call = Call::decode("BootNotification", &record).unwrap();
    assert_eq!(call.to_record().to_json(), boot_json());
}

#[test]
fn padded_status_strings_are_rejected() {
    init_logger();
    let err = ClearCacheResponse::try_from_json(&json!({"status": " Accepted\n"})).unwrap_err();
    assert_eq!(err.field(), "status");
    assert!(matches!(err.kind(), ParseErrorKind::InvalidValue(_)));
    assert!(ClearCacheResponse::try_from_json(&json!({"status": "Accepted "})).is_err());
}

#[test]
fn non_finite_decimals_fail_validation() {
    init_logger();
    let response = TransactionEventResponse {
        total_cost: Some(f64::NAN),
        ..TransactionEventResponse::default()
    };
    assert_eq!(response.to_json(), json!({"totalCost": null}));
    let err = response.validate().unwrap_err();
    assert_eq!(err.field(), "totalCost");

    let finite = TransactionEventResponse {
        total_cost: Some(12.75),
        ..TransactionEventResponse::default()
    };
    assert!(finite.validate().is_ok());
}

#[test]
fn requests_with_non_finite_values_are_not_encoded() {
    init_logger();
    let request = Request::<MeterValues>::new(
        charge_box(),
        MeterValuesRequest {
            evse_id: 1,
            meter_value: [MeterValue {
                sampled_value: [SampledValue::new(f64::INFINITY)].into(),
                timestamp: Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap(),
                custom_data: None,
            }]
            .into(),
            custom_data: None,
        },
    );
    let codec = Codec::new(WireFormat::Json, ProtocolVersion::V201);
    match codec.encode_request(&request, &Hooks::none()) {
        Err(Error::Parse(err)) => assert_eq!(err.path(), "meterValue[0].sampledValue[0].value"),
        other => panic!("expected a parse error, got {other:?}"),
    }
}
