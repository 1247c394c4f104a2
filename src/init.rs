use crate::env::{env_or, SF_FORMATTER_LEVEL_ENV};
use crate::formatter::LineFormatter;
use crate::location::RecordedLine;
use tracing::Subscriber;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::DefaultFields;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Registry;

/// Where formatted lines are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriterTarget {
    Stdout,
    #[default]
    Stderr,
}

/// Configuration for the subscriber installed by [`init_tracing_with_config`].
///
/// **Fields**
/// - `formatter`: the [`LineFormatter`] used for every event.
/// - `max_level`: most verbose level that gets formatted.
/// - `target`: stdout or stderr.
#[derive(Clone, Debug)]
pub struct FormatterConfig {
    pub formatter: LineFormatter,
    pub max_level: LevelFilter,
    pub target: WriterTarget,
}

impl Default for FormatterConfig {
    /// `tracing` events carry their own line number, so the default uses
    /// [`RecordedLine`] instead of walking the stack. The level comes from
    /// `SF_FORMATTER_LEVEL` (default `info`).
    fn default() -> Self {
        let max_level = env_or(SF_FORMATTER_LEVEL_ENV, "info")
            .parse()
            .unwrap_or(LevelFilter::INFO);

        Self {
            formatter: LineFormatter::new().with_locator(RecordedLine),
            max_level,
            target: WriterTarget::default(),
        }
    }
}

/// Error returned when the global subscriber can't be installed.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("failed to install global subscriber: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// A `fmt` layer that formats events with `formatter`, for callers that
/// assemble their own subscriber.
pub fn fmt_layer<S>(
    formatter: LineFormatter,
) -> tracing_subscriber::fmt::Layer<S, DefaultFields, LineFormatter>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer().event_format(formatter)
}

/// Install a global subscriber that writes every event as a
/// [`LineFormatter`] line.
///
/// **Returns**
/// - `Err(InitError::SetGlobalDefault)` if a global subscriber is already set.
pub fn init_tracing_with_config(config: FormatterConfig) -> Result<(), InitError> {
    let layer = fmt_layer(config.formatter);

    // The writer changes the layer type, so build the subscriber per target.
    match config.target {
        WriterTarget::Stdout => {
            let subscriber = Registry::default()
                .with(config.max_level)
                .with(layer.with_writer(std::io::stdout));
            tracing::subscriber::set_global_default(subscriber)?;
        }
        WriterTarget::Stderr => {
            let subscriber = Registry::default()
                .with(config.max_level)
                .with(layer.with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    tracing::debug!(
        max_level = %config.max_level,
        writer = ?config.target,
        "line formatter installed"
    );
    Ok(())
}

/// Install the line formatter with [`FormatterConfig::default`].
pub fn init_tracing() -> Result<(), InitError> {
    init_tracing_with_config(FormatterConfig::default())
}
