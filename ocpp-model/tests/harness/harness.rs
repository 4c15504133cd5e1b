use std::sync::Once;

use log::LevelFilter;
use rocpp_model::ModelError;

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Trace)
            .try_init()
            .ok();
    });
}

/// The error of `result`; panics if the value was accepted.
pub fn violation<T: std::fmt::Debug>(result: Result<T, ModelError>) -> ModelError {
    match result {
        Err(err) => err,
        Ok(value) => panic!("expected a violation, got {value:?}"),
    }
}
