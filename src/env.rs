//! Environment variable names read by this crate, plus the env-backed
//! [`StackTraceFlag`].
//!
//! The formatter itself never touches the environment; it only sees the
//! flag through the [`StackTraceFlag`] trait.

use crate::config::StackTraceFlag;

/// Set to exactly `true` to append redacted stack traces of logged errors.
pub const SF_FORMATTER_DUMP_STACKTRACE_ENV: &str = "SF_FORMATTER_DUMP_STACKTRACE";

/// Maximum level installed by [`init_tracing`](crate::init::init_tracing),
/// e.g. `debug`. Defaults to `info`.
pub const SF_FORMATTER_LEVEL_ENV: &str = "SF_FORMATTER_LEVEL";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// [`StackTraceFlag`] read from [`SF_FORMATTER_DUMP_STACKTRACE_ENV`] on every
/// call. Only the literal value `true` enables it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvStackTraceFlag;

impl StackTraceFlag for EnvStackTraceFlag {
    fn enabled(&self) -> bool {
        matches!(std::env::var(SF_FORMATTER_DUMP_STACKTRACE_ENV).as_deref(), Ok("true"))
    }
}
