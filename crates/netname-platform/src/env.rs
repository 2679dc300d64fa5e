use std::env;

/// Read an environment variable.
///
/// Returns `None` only when the variable is unset. A value that is not valid
/// UTF-8 is converted lossily instead of being dropped.
pub fn var(key: &str) -> Option<String> {
    env::var_os(key).map(|v| v.to_string_lossy().into_owned())
}
