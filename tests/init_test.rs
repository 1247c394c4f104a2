// Installs a global subscriber, so it lives in its own test binary.

use sf_line_formatter::init::{init_tracing_with_config, FormatterConfig, InitError, WriterTarget};
use tracing_subscriber::filter::LevelFilter;

#[test]
fn test_init_installs_once() {
    let config = FormatterConfig {
        max_level: LevelFilter::WARN,
        target: WriterTarget::Stdout,
        ..FormatterConfig::default()
    };
    assert!(init_tracing_with_config(config.clone()).is_ok());

    tracing::warn!("installed");

    let err = init_tracing_with_config(config).unwrap_err();
    assert!(matches!(err, InitError::SetGlobalDefault(_)));
}
