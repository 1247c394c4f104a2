//! Line-number recovery for events that don't carry one.
//!
//! [`StackWalk`] captures the current call stack and looks for the first
//! frame whose `path::to::Type` and method name match the event's source
//! class and method. This is best-effort: with recursion or several
//! functions sharing a path, the innermost matching frame wins, which may
//! not be the frame that actually logged.

use crate::record::LogEvent;
use std::backtrace::Backtrace;

/// Recovers the source line of a [`LogEvent`].
pub trait LineLocator: Send + Sync {
    /// `None` means the line is unknown; the formatter prints `-1`.
    fn locate(&self, event: &LogEvent) -> Option<u32>;
}

/// Walks the current thread's stack at format time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackWalk;

impl LineLocator for StackWalk {
    fn locate(&self, event: &LogEvent) -> Option<u32> {
        let trace = Backtrace::force_capture().to_string();
        first_match(&trace, &event.source_class_name, &event.source_method_name)
    }
}

/// Uses the line supplied by the host framework (`LogEvent::line`).
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedLine;

impl LineLocator for RecordedLine {
    fn locate(&self, event: &LogEvent) -> Option<u32> {
        event.line
    }
}

/// For hosts without any line information.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLine;

impl LineLocator for NoLine {
    fn locate(&self, _event: &LogEvent) -> Option<u32> {
        None
    }
}

/// One frame parsed from a rendered backtrace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    /// Demangled symbol, e.g. `my_crate::db::Conn::query`.
    pub symbol: String,
    pub line: Option<u32>,
}

impl StackFrame {
    /// Split the symbol at its last `::` into `(class, method)`.
    pub fn class_and_method(&self) -> (&str, &str) {
        self.symbol.rsplit_once("::").unwrap_or(("", self.symbol.as_str()))
    }
}

/// Parse the `Display` rendering of a [`Backtrace`] into frames,
/// innermost first.
///
/// Symbol lines look like `  12: path::to::func` (or an indented bare name
/// for inlined symbols), location lines like `at src/lib.rs:10:5`.
pub fn parse_frames(trace: &str) -> Vec<StackFrame> {
    let mut frames: Vec<StackFrame> = Vec::new();

    for raw in trace.lines() {
        if raw.trim().is_empty() || !raw.starts_with(' ') {
            continue;
        }
        let text = raw.trim_start();

        if let Some(location) = text.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                if frame.line.is_none() {
                    frame.line = parse_line(location);
                }
            }
            continue;
        }

        let symbol = match text.split_once(": ") {
            Some((index, name)) if index.chars().all(|c| c.is_ascii_digit()) => name,
            _ => text,
        };
        frames.push(StackFrame {
            symbol: symbol.trim().to_string(),
            line: None,
        });
    }

    frames
}

/// Line of the first frame matching `class_name` and `method_name`.
pub fn first_match(trace: &str, class_name: &str, method_name: &str) -> Option<u32> {
    parse_frames(trace)
        .into_iter()
        .find(|frame| frame.class_and_method() == (class_name, method_name))
        .and_then(|frame| frame.line)
}

// `path:line:col` or `path:line`; the path itself may contain ':'.
fn parse_line(location: &str) -> Option<u32> {
    let mut parts = location.trim().rsplitn(3, ':');
    let last = parts.next()?;
    let middle = parts.next()?;

    match parts.next() {
        Some(_) => middle.parse().ok().or_else(|| last.parse().ok()),
        None => last.parse().ok(),
    }
}
