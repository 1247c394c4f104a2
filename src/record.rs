use chrono::Utc;
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;
use tracing::Level;

/// A single log event as handed to [`LineFormatter`](crate::formatter::LineFormatter).
///
/// Events are built by the caller (or by the `tracing` bridge in
/// [`layer`](crate::layer)) and are never mutated by the formatter.
#[derive(Debug, Clone)]
pub struct LogEvent {
    /// Epoch milliseconds, UTC.
    pub timestamp_millis: i64,
    pub level: Level,
    pub source_class_name: String,
    pub source_method_name: String,
    /// Raw message, possibly holding `{N}` placeholders.
    pub message: String,
    /// Positional arguments for `{N}` placeholders.
    pub args: Vec<String>,
    /// Line number supplied by the host framework, if it has one.
    pub line: Option<u32>,
    pub thrown: Option<Thrown>,
}

impl LogEvent {
    /// Create an event stamped with the current time.
    pub fn new(
        level: Level,
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LogEvent {
            timestamp_millis: Utc::now().timestamp_millis(),
            level,
            source_class_name: class_name.into(),
            source_method_name: method_name.into(),
            message: message.into(),
            args: Vec::new(),
            line: None,
            thrown: None,
        }
    }

    pub fn with_millis(mut self, millis: i64) -> Self {
        self.timestamp_millis = millis;
        self
    }

    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        self.args.extend(args.into_iter().map(|a| a.to_string()));
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_thrown(mut self, thrown: Thrown) -> Self {
        self.thrown = Some(thrown);
        self
    }
}

/// Owned snapshot of an error value attached to a [`LogEvent`].
///
/// The error chain is rendered eagerly so the snapshot can outlive the
/// borrowed `dyn Error` it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thrown {
    pub description: String,
    /// `source()` chain, outermost first.
    pub causes: Vec<String>,
    pub backtrace: Option<String>,
}

impl Thrown {
    /// Snapshot `err` and its source chain without a backtrace.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }

        Thrown {
            description: err.to_string(),
            causes,
            backtrace: None,
        }
    }

    /// Snapshot `err` and force a backtrace of the current thread,
    /// regardless of `RUST_BACKTRACE`.
    pub fn capture(err: &(dyn Error + 'static)) -> Self {
        Self::from_error(err).with_backtrace(Backtrace::force_capture().to_string())
    }

    pub fn with_backtrace(mut self, backtrace: impl Into<String>) -> Self {
        self.backtrace = Some(backtrace.into());
        self
    }

    /// Render the error the way a stack dump reads: description, one
    /// `Caused by:` line per cause, then the backtrace.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        out.push_str(&self.description);
        out.push('\n');
        for cause in &self.causes {
            out.push_str("Caused by: ");
            out.push_str(cause);
            out.push('\n');
        }
        if let Some(bt) = &self.backtrace {
            out.push_str(bt);
            if !bt.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Thrown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
