//! Environment variable utilities.
//!
//! Small parsing helpers for the `ECERR_*` configuration variables.
//!
//! ```ignore
//! use ecerr_core::env::{env_get, env_get_bool};
//!
//! let rounds: usize = env_get("ECERR_DEMO_ROUNDS", 2);
//! let flush = env_get_bool("ECERR_FLUSH_STDERR", false);
//! ```

use std::str::FromStr;

/// Get an environment variable parsed as `T`, or the default.
///
/// Unset and unparsable values both fall back to the default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get an environment variable as a boolean.
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true; any other
/// set value is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}
