//! Shared data types of OCPP 1.6.

mod authorization_data;
mod authorization_status;
mod availability;
mod charge_point_error_code;
mod charge_point_status;
mod charging_profile_kind;
mod charging_profile_status;
mod charging_schedule;
mod charging_schedule_period;
mod configuration_status;
mod data_transfer_status;
mod diagnostics_status;
mod firmware_status;
mod id_tag_info;
mod key_value;
mod location;
mod measurand;
mod message_trigger;
mod meter_value;
mod phase;
mod reading_context;
mod reason;
mod registration_status;
mod reservation_status;
mod reset;
mod sampled_value;
mod simple_status;
mod trigger_message_status;
mod unit_of_measure;
mod unlock_status;
mod update_status;

pub use authorization_data::AuthorizationData;
pub use authorization_status::AuthorizationStatus;
pub use availability::{AvailabilityStatus, AvailabilityType};
pub use charge_point_error_code::ChargePointErrorCode;
pub use charge_point_status::ChargePointStatus;
pub use charging_profile_kind::{
    ChargingProfileKindType, ChargingProfilePurposeType, ChargingRateUnitType, RecurrencyKindType,
};
pub use charging_profile_status::{ChargingProfileStatus, ClearChargingProfileStatus};
pub use charging_schedule::{ChargingProfile, ChargingSchedule};
pub use charging_schedule_period::ChargingSchedulePeriod;
pub use configuration_status::ConfigurationStatus;
pub use data_transfer_status::DataTransferStatus;
pub use diagnostics_status::DiagnosticsStatus;
pub use firmware_status::FirmwareStatus;
pub use id_tag_info::IdTagInfo;
pub use key_value::KeyValue;
pub use location::Location;
pub use measurand::Measurand;
pub use message_trigger::MessageTrigger;
pub use meter_value::MeterValue;
pub use phase::Phase;
pub use reading_context::{ReadingContext, ValueFormat};
pub use reason::Reason;
pub use registration_status::RegistrationStatus;
pub use reservation_status::{CancelReservationStatus, ReservationStatus};
pub use reset::{ResetStatus, ResetType};
pub use sampled_value::SampledValue;
pub use simple_status::{ClearCacheStatus, GetCompositeScheduleStatus, RemoteStartStopStatus};
pub use trigger_message_status::TriggerMessageStatus;
pub use unit_of_measure::UnitOfMeasure;
pub use unlock_status::UnlockStatus;
pub use update_status::{UpdateStatus, UpdateType};
