use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Initializes env_logger, reading the filter from `CPPNEW_LOG`.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_ENV, DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .init();
}
