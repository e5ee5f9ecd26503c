//! Small helpers for reading configuration from the environment.

use std::env;

/// Returns the trimmed value of `name` when it is set and not blank.
pub fn env_non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Interprets `name` as a boolean switch.
///
/// Unset, empty, `0` and `false` (any case) are off; anything else is on.
pub fn env_flag(name: &str) -> bool {
    env_non_empty(name)
        .map(|value| value != "0" && !value.eq_ignore_ascii_case("false"))
        .unwrap_or(false)
}
