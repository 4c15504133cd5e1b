mod absolute_price_schedule;
mod ac_charging_parameters;
mod additional_selected_services;
mod charging_limit;
mod charging_needs;
mod charging_period;
mod charging_profile;
mod charging_profile_criterion;
mod charging_profile_kind;
mod charging_profile_purpose;
mod charging_profile_status;
mod charging_rate_unit;
mod charging_schedule;
mod charging_schedule_period;
mod charging_schedule_update;
mod clear_charging_profile;
mod clear_charging_profile_status;
mod clear_tariffs_result;
mod composite_schedule;
mod consumption_cost;
mod control_mode;
mod cost;
mod cost_details;
mod cost_dimension;
mod cost_dimension_volume;
mod cost_kind;
mod custom_data;
mod day_of_week;
mod dc_charging_parameters;
mod der_charging_parameters;
mod der_control;
mod der_control_status;
mod der_curve;
mod der_curve_get;
mod der_curve_points;
mod der_unit;
mod energy_transfer_mode;
mod enter_service;
mod enter_service_get;
mod ev_absolute_price_schedule;
mod ev_absolute_price_schedule_entry;
mod ev_energy_offer;
mod ev_power_schedule;
mod ev_power_schedule_entry;
mod ev_price_rule;
mod evse;
mod evse_kind;
mod fixed_pf;
mod fixed_pf_get;
mod fixed_var;
mod fixed_var_get;
mod freq_droop;
mod freq_droop_get;
mod generic_status;
mod get_charging_profile_status;
mod gradient;
mod gradient_get;
mod grid_event_fault;
mod hysteresis;
mod islanding_detection;
mod limit_at_soc;
mod limit_max_discharge;
mod limit_max_discharge_get;
mod message_content;
mod message_format;
mod mobility_needs_mode;
mod notify_ev_charging_needs_status;
mod operation_mode;
mod overstay_rule;
mod overstay_rule_list;
mod power_during_cessation;
mod price;
mod price_level_schedule;
mod price_level_schedule_entry;
mod price_rule;
mod price_rule_stack;
mod priority_charging_status;
mod rational_number;
mod reactive_power_params;
mod recurrency_kind;
mod relative_time_interval;
mod sales_tariff;
mod sales_tariff_entry;
mod schedule_pricing;
mod status_info;
mod tariff;
mod tariff_assignment;
mod tariff_change_status;
mod tariff_clear_status;
mod tariff_conditions;
mod tariff_conditions_fixed;
mod tariff_cost;
mod tariff_energy;
mod tariff_energy_price;
mod tariff_fixed;
mod tariff_fixed_price;
mod tariff_get_status;
mod tariff_kind;
mod tariff_set_status;
mod tariff_time;
mod tariff_time_price;
mod tax_rate;
mod tax_rule;
mod total_cost;
mod total_price;
mod total_usage;
mod v2x_charging_parameters;
mod v2x_freq_watt_point;
mod v2x_signal_watt_point;
mod voltage_params;

pub use absolute_price_schedule::*;
pub use ac_charging_parameters::*;
pub use additional_selected_services::*;
pub use charging_limit::*;
pub use charging_needs::*;
pub use charging_period::*;
pub use charging_profile::*;
pub use charging_profile_criterion::*;
pub use charging_profile_kind::*;
pub use charging_profile_purpose::*;
pub use charging_profile_status::*;
pub use charging_rate_unit::*;
pub use charging_schedule::*;
pub use charging_schedule_period::*;
pub use charging_schedule_update::*;
pub use clear_charging_profile::*;
pub use clear_charging_profile_status::*;
pub use clear_tariffs_result::*;
pub use composite_schedule::*;
pub use consumption_cost::*;
pub use control_mode::*;
pub use cost::*;
pub use cost_details::*;
pub use cost_dimension::*;
pub use cost_dimension_volume::*;
pub use cost_kind::*;
pub use custom_data::*;
pub use day_of_week::*;
pub use dc_charging_parameters::*;
pub use der_charging_parameters::*;
pub use der_control::*;
pub use der_control_status::*;
pub use der_curve::*;
pub use der_curve_get::*;
pub use der_curve_points::*;
pub use der_unit::*;
pub use energy_transfer_mode::*;
pub use enter_service::*;
pub use enter_service_get::*;
pub use ev_absolute_price_schedule::*;
pub use ev_absolute_price_schedule_entry::*;
pub use ev_energy_offer::*;
pub use ev_power_schedule::*;
pub use ev_power_schedule_entry::*;
pub use ev_price_rule::*;
pub use evse::*;
pub use evse_kind::*;
pub use fixed_pf::*;
pub use fixed_pf_get::*;
pub use fixed_var::*;
pub use fixed_var_get::*;
pub use freq_droop::*;
pub use freq_droop_get::*;
pub use generic_status::*;
pub use get_charging_profile_status::*;
pub use gradient::*;
pub use gradient_get::*;
pub use grid_event_fault::*;
pub use hysteresis::*;
pub use islanding_detection::*;
pub use limit_at_soc::*;
pub use limit_max_discharge::*;
pub use limit_max_discharge_get::*;
pub use message_content::*;
pub use message_format::*;
pub use mobility_needs_mode::*;
pub use notify_ev_charging_needs_status::*;
pub use operation_mode::*;
pub use overstay_rule::*;
pub use overstay_rule_list::*;
pub use power_during_cessation::*;
pub use price::*;
pub use price_level_schedule::*;
pub use price_level_schedule_entry::*;
pub use price_rule::*;
pub use price_rule_stack::*;
pub use priority_charging_status::*;
pub use rational_number::*;
pub use reactive_power_params::*;
pub use recurrency_kind::*;
pub use relative_time_interval::*;
pub use sales_tariff::*;
pub use sales_tariff_entry::*;
pub use schedule_pricing::*;
pub use status_info::*;
pub use tariff::*;
pub use tariff_assignment::*;
pub use tariff_change_status::*;
pub use tariff_clear_status::*;
pub use tariff_conditions::*;
pub use tariff_conditions_fixed::*;
pub use tariff_cost::*;
pub use tariff_energy::*;
pub use tariff_energy_price::*;
pub use tariff_fixed::*;
pub use tariff_fixed_price::*;
pub use tariff_get_status::*;
pub use tariff_kind::*;
pub use tariff_set_status::*;
pub use tariff_time::*;
pub use tariff_time_price::*;
pub use tax_rate::*;
pub use tax_rule::*;
pub use total_cost::*;
pub use total_price::*;
pub use total_usage::*;
pub use v2x_charging_parameters::*;
pub use v2x_freq_watt_point::*;
pub use v2x_signal_watt_point::*;
pub use voltage_params::*;
