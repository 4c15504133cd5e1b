pub mod tc_conversion_errors;
pub mod tc_exi_non_canonical;
pub mod tc_exi_primitives;
pub mod tc_exi_random_round_trip;
pub mod tc_price_level_schedule;
