//! Common constants used throughout cppnew.

/// Executable name shown in help, version and usage text
pub const PROGRAM_NAME: &str = "cppnew";

/// Environment variable holding the log filter (env_logger syntax)
pub const LOG_ENV: &str = "CPPNEW_LOG";

/// Log filter applied when [`LOG_ENV`] is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Environment variable that overrides the author found in git configuration
pub const AUTHOR_ENV: &str = "CPPNEW_AUTHOR";

/// Git configuration key read for the default author
pub const GIT_USER_NAME_KEY: &str = "user.name";
