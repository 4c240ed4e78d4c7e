mod harness;

use harness::init_logger;
use rocpp_codec::dispatch::Catalogue;
use rocpp_codec::error::ParseErrorKind;
use rocpp_codec::v16::messages::*;
use rocpp_codec::v16::types::*;
use rocpp_codec::v16::Call;
use rocpp_codec::{Payload, Record};
use serde_json::json;

#[test]
fn boot_notification_request_round_trip() {
    init_logger();
    let raw = json!({
        "chargePointVendor": "VendorX",
        "chargePointModel": "ModelY",
        "firmwareVersion": "1.0.3"
    });
    let request = BootNotificationRequest::try_from_json(&raw).unwrap();
    let mut expected = BootNotificationRequest::new("VendorX", "ModelY");
    expected.firmware_version = Some("1.0.3".into());
    assert_eq!(request, expected);
    assert_eq!(request.to_json(), raw);
}

#[test]
fn boot_notification_vendor_length_is_checked() {
    init_logger();
    let err = BootNotificationRequest::try_from_json(&json!({
        "chargePointVendor": "V".repeat(21),
        "chargePointModel": "ModelY"
    }))
    .unwrap_err();
    assert_eq!(err.field(), "chargePointVendor");
    assert!(matches!(err.kind(), ParseErrorKind::InvalidValue(_)));
}

#[test]
fn get_configuration_keys() {
    init_logger();
    let all = GetConfigurationRequest::try_from_json(&json!({})).unwrap();
    assert_eq!(all.key, None);

    let empty = GetConfigurationRequest::try_from_json(&json!({"key": []})).unwrap();
    assert_eq!(empty.key.as_ref().map(|k| k.len()), Some(0));

    let err = GetConfigurationRequest::try_from_json(&json!({"key": ["k".repeat(51)]})).unwrap_err();
    assert_eq!(err.field(), "key");

    let response = GetConfigurationResponse::try_from_json(&json!({
        "configurationKey": [
            {"key": "HeartbeatInterval", "readonly": false, "value": "300"}
        ],
        "unknownKey": ["Foo"]
    }))
    .unwrap();
    let entry = response.configuration_key.as_ref().and_then(|keys| keys.first()).unwrap();
    assert_eq!(entry.key, "HeartbeatInterval");
    assert_eq!(entry.value.as_deref(), Some("300"));
}

#[test]
fn meter_values_merge_duplicate_samples() {
    init_logger();
    let raw = json!({
        "connectorId": 1,
        "transactionId": 7,
        "meterValue": [{
            "timestamp": "2024-03-01T10:00:00Z",
            "sampledValue": [
                {"value": "10.5", "measurand": "Energy.Active.Import.Register", "unit": "kWh"},
                {"value": "10.5", "measurand": "Energy.Active.Import.Register", "unit": "kWh"},
                {"value": "16", "measurand": "Current.Import", "phase": "L1"}
            ]
        }]
    });
    let request = MeterValuesRequest::try_from_json(&raw).unwrap();
    let samples = &request.meter_value.first().unwrap().sampled_value;
    assert_eq!(samples.len(), 2);
    assert_eq!(samples.first().unwrap().measurand, Some(Measurand::EnergyActiveImportRegister));

    let err = MeterValuesRequest::try_from_json(&json!({"connectorId": 1, "meterValue": []})).unwrap_err();
    assert_eq!(err.field(), "meterValue");
}

#[test]
fn start_transaction_connector_must_be_positive() {
    init_logger();
    let raw = json!({
        "connectorId": 0,
        "idTag": "TAG-1",
        "meterStart": 0,
        "timestamp": "2024-03-01T10:00:00Z"
    });
    let err = StartTransactionRequest::try_from_json(&raw).unwrap_err();
    assert_eq!(err.field(), "connectorId");
}

#[test]
fn empty_payloads_encode_as_empty_objects() {
    init_logger();
    assert_eq!(HeartbeatRequest::default().to_json(), json!({}));
    assert_eq!(HeartbeatRequest::try_from_json(&json!({})).unwrap(), HeartbeatRequest {});
    assert!(HeartbeatResponse::try_from_json(&json!({})).is_err());
}

#[test]
fn catalogue_covers_all_actions() {
    init_logger();
    assert_eq!(Call::ACTIONS.len(), 28);
    assert!(Call::supports("StopTransaction"));
    assert!(!Call::supports("TransactionEvent"));
    let call = Call::decode("ClearCache", &Record::new()).unwrap();
    assert_eq!(call, Call::ClearCache(ClearCacheRequest {}));
}
