//! Environment lookups that feed option defaults and rendering:
//! the current user (for the author default) and the current year.

use chrono::Datelike;
use log::debug;

use crate::constants::{AUTHOR_ENV, GIT_USER_NAME_KEY};

/// Best-effort source of the current user's name.
///
/// Implementations never fail: an unknown user is `None`.
pub trait CurrentUserProvider {
    fn current_user(&self) -> Option<String>;
}

/// Reads `CPPNEW_AUTHOR`, then `user.name` from the default git configuration.
#[derive(Debug, Default)]
pub struct GitUser;

impl GitUser {
    pub fn new() -> Self {
        Self
    }
}

impl CurrentUserProvider for GitUser {
    fn current_user(&self) -> Option<String> {
        if let Some(name) = non_blank(std::env::var(AUTHOR_ENV).ok()) {
            debug!("author taken from {}", AUTHOR_ENV);
            return Some(name);
        }

        match git2::Config::open_default() {
            Ok(config) => user_name_from_config(&config),
            Err(e) => {
                debug!("git configuration unavailable: {}", e.message());
                None
            }
        }
    }
}

/// Provider returning a fixed answer, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct FixedUser(pub Option<String>);

impl CurrentUserProvider for FixedUser {
    fn current_user(&self) -> Option<String> {
        self.0.clone()
    }
}

/// `user.name` from a git configuration, if set and not blank.
pub fn user_name_from_config(config: &git2::Config) -> Option<String> {
    match config.get_string(GIT_USER_NAME_KEY) {
        Ok(name) => non_blank(Some(name)),
        Err(e) => {
            debug!("{} not found: {}", GIT_USER_NAME_KEY, e.message());
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Current local year as a 4-digit string.
pub fn current_year() -> String {
    format!("{:04}", chrono::Local::now().year())
}
