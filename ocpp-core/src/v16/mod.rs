//! OCPP 1.6, JSON and SOAP.

pub mod messages;
pub mod types;

use messages::*;

actions! {
    /// Every OCPP 1.6 request, keyed by action name.
    pub enum Call;
    Authorize => AuthorizeRequest, AuthorizeResponse;
    BootNotification => BootNotificationRequest, BootNotificationResponse;
    CancelReservation => CancelReservationRequest, CancelReservationResponse;
    ChangeAvailability => ChangeAvailabilityRequest, ChangeAvailabilityResponse;
    ChangeConfiguration => ChangeConfigurationRequest, ChangeConfigurationResponse;
    ClearCache => ClearCacheRequest, ClearCacheResponse;
    ClearChargingProfile => ClearChargingProfileRequest, ClearChargingProfileResponse;
    DataTransfer => DataTransferRequest, DataTransferResponse;
    DiagnosticsStatusNotification => DiagnosticsStatusNotificationRequest, DiagnosticsStatusNotificationResponse;
    FirmwareStatusNotification => FirmwareStatusNotificationRequest, FirmwareStatusNotificationResponse;
    GetCompositeSchedule => GetCompositeScheduleRequest, GetCompositeScheduleResponse;
    GetConfiguration => GetConfigurationRequest, GetConfigurationResponse;
    GetDiagnostics => GetDiagnosticsRequest, GetDiagnosticsResponse;
    GetLocalListVersion => GetLocalListVersionRequest, GetLocalListVersionResponse;
    Heartbeat => HeartbeatRequest, HeartbeatResponse;
    MeterValues => MeterValuesRequest, MeterValuesResponse;
    RemoteStartTransaction => RemoteStartTransactionRequest, RemoteStartTransactionResponse;
    RemoteStopTransaction => RemoteStopTransactionRequest, RemoteStopTransactionResponse;
    ReserveNow => ReserveNowRequest, ReserveNowResponse;
    Reset => ResetRequest, ResetResponse;
    SendLocalList => SendLocalListRequest, SendLocalListResponse;
    SetChargingProfile => SetChargingProfileRequest, SetChargingProfileResponse;
    StartTransaction => StartTransactionRequest, StartTransactionResponse;
    StatusNotification => StatusNotificationRequest, StatusNotificationResponse;
    StopTransaction => StopTransactionRequest, StopTransactionResponse;
    TriggerMessage => TriggerMessageRequest, TriggerMessageResponse;
    UnlockConnector => UnlockConnectorRequest, UnlockConnectorResponse;
    UpdateFirmware => UpdateFirmwareRequest, UpdateFirmwareResponse;
}
