//! OCPP 2.0.1, JSON only. Every type carries an optional `customData` bag.

pub mod messages;
pub mod types;

use messages::*;

actions! {
    /// Every supported OCPP 2.0.1 request, keyed by action name.
    pub enum Call;
    Authorize => AuthorizeRequest, AuthorizeResponse;
    BootNotification => BootNotificationRequest, BootNotificationResponse;
    CancelReservation => CancelReservationRequest, CancelReservationResponse;
    CertificateSigned => CertificateSignedRequest, CertificateSignedResponse;
    ChangeAvailability => ChangeAvailabilityRequest, ChangeAvailabilityResponse;
    ClearCache => ClearCacheRequest, ClearCacheResponse;
    ClearChargingProfile => ClearChargingProfileRequest, ClearChargingProfileResponse;
    ClearVariableMonitoring => ClearVariableMonitoringRequest, ClearVariableMonitoringResponse;
    DataTransfer => DataTransferRequest, DataTransferResponse;
    DeleteCertificate => DeleteCertificateRequest, DeleteCertificateResponse;
    GetBaseReport => GetBaseReportRequest, GetBaseReportResponse;
    GetInstalledCertificateIds => GetInstalledCertificateIdsRequest, GetInstalledCertificateIdsResponse;
    GetLocalListVersion => GetLocalListVersionRequest, GetLocalListVersionResponse;
    GetVariables => GetVariablesRequest, GetVariablesResponse;
    Heartbeat => HeartbeatRequest, HeartbeatResponse;
    MeterValues => MeterValuesRequest, MeterValuesResponse;
    NotifyReport => NotifyReportRequest, NotifyReportResponse;
    RequestStartTransaction => RequestStartTransactionRequest, RequestStartTransactionResponse;
    RequestStopTransaction => RequestStopTransactionRequest, RequestStopTransactionResponse;
    ReserveNow => ReserveNowRequest, ReserveNowResponse;
    Reset => ResetRequest, ResetResponse;
    SecurityEventNotification => SecurityEventNotificationRequest, SecurityEventNotificationResponse;
    SendLocalList => SendLocalListRequest, SendLocalListResponse;
    SetChargingProfile => SetChargingProfileRequest, SetChargingProfileResponse;
    SetVariableMonitoring => SetVariableMonitoringRequest, SetVariableMonitoringResponse;
    SetVariables => SetVariablesRequest, SetVariablesResponse;
    StatusNotification => StatusNotificationRequest, StatusNotificationResponse;
    TransactionEvent => TransactionEventRequest, TransactionEventResponse;
    TriggerMessage => TriggerMessageRequest, TriggerMessageResponse;
    UnlockConnector => UnlockConnectorRequest, UnlockConnectorResponse;
}
