pub mod set_charging_profile;
pub mod get_charging_profiles;
pub mod clear_charging_profile;
pub mod report_charging_profiles;
pub mod get_composite_schedule;
pub mod notify_charging_limit;
pub mod cleared_charging_limit;
pub mod notify_ev_charging_needs;
pub mod notify_ev_charging_schedule;
pub mod notify_priority_charging;
pub mod use_priority_charging;
pub mod pull_dynamic_schedule_update;
pub mod update_dynamic_schedule;
pub mod set_default_tariff;
pub mod get_tariffs;
pub mod clear_tariffs;
pub mod change_transaction_tariff;
pub mod set_der_control;
pub mod get_der_control;
pub mod clear_der_control;
pub mod report_der_control;
pub mod notify_der_alarm;
pub mod notify_der_start_stop;
