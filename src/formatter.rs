use crate::config::{ClassAbbreviations, StackTraceFlag};
use crate::env::EnvStackTraceFlag;
use crate::location::{LineLocator, StackWalk};
use crate::mask::{SecretDetector, SecretMasker};
use crate::message::interpolate;
use crate::record::LogEvent;
use chrono::{DateTime, Utc};
use std::fmt;
use std::fmt::Write as _;
use std::sync::Arc;

/// Timestamp layout: `yyyy-MM-dd HH:mm:ss.SSS`, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Line number printed when the source line can't be recovered.
pub const UNKNOWN_LINE: i64 = -1;

/// Turns one [`LogEvent`] into one log line:
///
/// ```text
/// 2024-03-01 08:15:02.117 n.s.c.jdbc.Session INFO open:88 - opened session 42
/// ```
///
/// When the stack-trace flag is on and the event carries an error, the
/// rendered error follows on the next lines, passed through the configured
/// [`SecretMasker`]. The message itself is not masked.
///
/// The formatter holds no mutable state; clone it freely and share it
/// across threads.
#[derive(Clone)]
pub struct LineFormatter {
    masker: Arc<dyn SecretMasker>,
    flag: Arc<dyn StackTraceFlag>,
    locator: Arc<dyn LineLocator>,
    abbreviations: ClassAbbreviations,
}

impl LineFormatter {
    /// Formatter with the built-in [`SecretDetector`], the env-driven
    /// stack-trace flag and stack-walk line recovery.
    pub fn new() -> Self {
        LineFormatter {
            masker: Arc::new(SecretDetector::default()),
            flag: Arc::new(EnvStackTraceFlag),
            locator: Arc::new(StackWalk),
            abbreviations: ClassAbbreviations::default(),
        }
    }

    pub fn with_masker(mut self, masker: impl SecretMasker + 'static) -> Self {
        self.masker = Arc::new(masker);
        self
    }

    pub fn with_stack_trace_flag(mut self, flag: impl StackTraceFlag + 'static) -> Self {
        self.flag = Arc::new(flag);
        self
    }

    pub fn with_locator(mut self, locator: impl LineLocator + 'static) -> Self {
        self.locator = Arc::new(locator);
        self
    }

    pub fn with_abbreviations(mut self, abbreviations: ClassAbbreviations) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    /// Format `event` as a single newline-terminated line, followed by the
    /// redacted stack trace when enabled. Never fails.
    pub fn format(&self, event: &LogEvent) -> String {
        let line_number = self.locator.locate(event).map_or(UNKNOWN_LINE, i64::from);
        let class_name = self.abbreviations.shorten(&event.source_class_name);
        let stack_trace = self.stack_trace(event);
        let message = interpolate(&event.message, &event.args);

        let mut out = String::with_capacity(128 + message.len() + stack_trace.len());
        // Writing into a String can't fail.
        let _ = writeln!(
            out,
            "{} {} {} {}:{} - {}{}",
            format_timestamp(event.timestamp_millis),
            class_name,
            event.level,
            event.source_method_name,
            line_number,
            message,
            stack_trace,
        );
        out
    }

    fn stack_trace(&self, event: &LogEvent) -> String {
        match &event.thrown {
            Some(thrown) if self.flag.enabled() => {
                let mut dump = String::from("\n");
                dump.push_str(&thrown.render());
                self.masker.mask_secrets(&dump)
            }
            _ => String::new(),
        }
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineFormatter")
            .field("abbreviations", &self.abbreviations)
            .finish_non_exhaustive()
    }
}

/// Render epoch milliseconds in UTC. Values chrono can't represent fall
/// back to the Unix epoch.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .unwrap_or_default()
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
