use crate::formatter::LineFormatter;
use crate::record::{LogEvent, Thrown};
use std::error::Error;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Field that overrides the class name (defaults to the module path).
pub const CLASS_FIELD: &str = "class";

/// Field that overrides the method name (defaults to the current span name).
pub const METHOD_FIELD: &str = "method";

/// Lets [`LineFormatter`] act as the event format of a
/// `tracing_subscriber::fmt` layer.
///
/// The `tracing` event is mapped to a [`LogEvent`]:
/// - class: `class` field, else the module path, else the target;
/// - method: `method` field, else the current span's name;
/// - every other field except `message` becomes a positional argument, in
///   recording order, so `info!(id = 7, "session {{0}} opened")` prints
///   `session 7 opened` (braces are doubled because the message goes
///   through `format_args!`);
/// - the first error recorded with `record_error` becomes the thrown error.
impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let span_name = ctx.lookup_current().map(|span| span.name());
        let record = log_event_from(event, span_name);
        writer.write_str(&self.format(&record))
    }
}

/// Build a [`LogEvent`] from a `tracing` event, stamped with the current time.
pub fn log_event_from(event: &Event<'_>, span_name: Option<&str>) -> LogEvent {
    let meta = event.metadata();
    let class = meta.module_path().unwrap_or_else(|| meta.target());

    let mut record = LogEvent::new(*meta.level(), class, span_name.unwrap_or_default(), "");
    record.line = meta.line();

    let mut visitor = EventVisitor { event: &mut record };
    event.record(&mut visitor);
    record
}

/// Copies `tracing` fields into a [`LogEvent`].
pub struct EventVisitor<'a> {
    pub event: &'a mut LogEvent,
}

impl EventVisitor<'_> {
    fn record_text(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.event.message = value,
            CLASS_FIELD => self.event.source_class_name = value,
            METHOD_FIELD => self.event.source_method_name = value,
            _ => self.event.args.push(value),
        }
    }
}

impl Visit for EventVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_text(field, value.to_string());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn Error + 'static)) {
        if self.event.thrown.is_none() {
            self.event.thrown = Some(Thrown::from_error(value));
        } else {
            self.record_text(field, value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_text(field, format!("{:?}", value));
    }
}
