//! Request/response payloads of OCPP 2.0.1, one module per action.

mod authorize;
mod boot_notification;
mod cancel_reservation;
mod certificate_signed;
mod change_availability;
mod clear_cache;
mod clear_charging_profile;
mod clear_variable_monitoring;
mod data_transfer;
mod delete_certificate;
mod get_base_report;
mod get_installed_certificate_ids;
mod get_local_list_version;
mod get_variables;
mod heartbeat;
mod meter_values;
mod notify_report;
mod request_start_transaction;
mod request_stop_transaction;
mod reserve_now;
mod reset;
mod security_event_notification;
mod send_local_list;
mod set_charging_profile;
mod set_variable_monitoring;
mod set_variables;
mod status_notification;
mod transaction_event;
mod trigger_message;
mod unlock_connector;

pub use authorize::*;
pub use boot_notification::*;
pub use cancel_reservation::*;
pub use certificate_signed::*;
pub use change_availability::*;
pub use clear_cache::*;
pub use clear_charging_profile::*;
pub use clear_variable_monitoring::*;
pub use data_transfer::*;
pub use delete_certificate::*;
pub use get_base_report::*;
pub use get_installed_certificate_ids::*;
pub use get_local_list_version::*;
pub use get_variables::*;
pub use heartbeat::*;
pub use meter_values::*;
pub use notify_report::*;
pub use request_start_transaction::*;
pub use request_stop_transaction::*;
pub use reserve_now::*;
pub use reset::*;
pub use security_event_notification::*;
pub use send_local_list::*;
pub use set_charging_profile::*;
pub use set_variable_monitoring::*;
pub use set_variables::*;
pub use status_notification::*;
pub use transaction_event::*;
pub use trigger_message::*;
pub use unlock_connector::*;
