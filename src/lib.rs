//! Single-line log formatter for database driver logs.
//!
//! [`LineFormatter`](formatter::LineFormatter) renders a [`LogEvent`](record::LogEvent)
//! as `timestamp class LEVEL method:line - message`, optionally followed by
//! the event's error, with secrets masked out of the dump. It plugs into
//! `tracing_subscriber::fmt` as an event format; see [`init`].

pub mod record;
pub mod message;
pub mod mask;
pub mod noop_masker;
pub mod config;
pub mod env;
pub mod location;
pub mod formatter;
pub mod layer;
pub mod init;

pub use config::{ClassAbbreviations, FixedFlag, StackTraceFlag};
pub use formatter::LineFormatter;
pub use location::{LineLocator, NoLine, RecordedLine, StackWalk};
pub use mask::{SecretDetector, SecretMasker};
pub use noop_masker::NoopMasker;
pub use record::{LogEvent, Thrown};
