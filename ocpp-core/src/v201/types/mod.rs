//! Shared data types of OCPP 2.0.1.

mod certificates;
mod charging;
mod custom_data;
mod device_model;
mod enums;
mod identity;
mod metering;
mod station;
mod status_info;
mod transaction;

pub use certificates::{CertificateHashData, CertificateHashDataChain, OcspRequestData};
pub use charging::{ChargingProfile, ChargingProfileCriterion, ChargingSchedule, ChargingSchedulePeriod};
pub use custom_data::CustomData;
pub use device_model::{
    ClearMonitoringResult, Component, GetVariableData, GetVariableResult, ReportData,
    SetMonitoringData, SetMonitoringResult, SetVariableData, SetVariableResult, Variable,
    VariableAttribute, VariableCharacteristics,
};
pub use enums::*;
pub use identity::{AdditionalInfo, AuthorizationData, IdToken, IdTokenInfo, MessageContent};
pub use metering::{MeterValue, SampledValue, SignedMeterValue, UnitOfMeasure};
pub use station::{ChargingStation, Evse, Modem};
pub use status_info::StatusInfo;
pub use transaction::Transaction;
