//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{DEFAULT_BATCH_SIZE, ENV_BATCH_SIZE, ENV_DB_POOL_SIZE, SQLITE_POOL_SIZE};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// SQLite pool size from `SAILING_VENUES_DB_POOL_SIZE`, never zero.
#[must_use]
pub fn sqlite_pool_size() -> u32 {
    env_parse_with_default(ENV_DB_POOL_SIZE, SQLITE_POOL_SIZE).max(1)
}

/// Loader chunk size from `SAILING_VENUES_BATCH_SIZE`, never zero.
#[must_use]
pub fn batch_size() -> usize {
    env_parse_with_default(ENV_BATCH_SIZE, DEFAULT_BATCH_SIZE).max(1)
}
