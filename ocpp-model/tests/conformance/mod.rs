pub mod tc_absence_vs_default;
pub mod tc_bounds;
pub mod tc_codec_errors;
pub mod tc_custom_data;
pub mod tc_end_to_end_profile;
pub mod tc_equality_hash;
pub mod tc_random_payloads;
pub mod tc_recursive_propagation;
pub mod tc_schedule_pricing;
pub mod tc_tariff_cost_der;
pub mod tc_try_update;
