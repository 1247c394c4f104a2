mod common;

use common::capture;
use regex::Regex;
use sf_line_formatter::{FixedFlag, LineFormatter, RecordedLine};
use tracing::{error, info, info_span, warn};

#[derive(Debug, thiserror::Error)]
#[error("handshake rejected")]
struct HandshakeError;

#[derive(Debug, thiserror::Error)]
#[error("auth rejected token=abcdef123456")]
struct AuthError(#[source] HandshakeError);

fn formatter(dump: bool) -> LineFormatter {
    LineFormatter::new()
        .with_locator(RecordedLine)
        .with_stack_trace_flag(FixedFlag(dump))
}

#[test]
fn test_span_name_becomes_method() {
    let mut expected_line = 0;
    let out = capture(formatter(false), || {
        let _span = info_span!("open_session").entered();
        expected_line = line!() + 1;
        info!(id = 7, "session {{0}} opened");
    });

    let expected = format!(
        " {} INFO open_session:{} - session 7 opened\n",
        module_path!(),
        expected_line
    );
    assert!(out.ends_with(&expected), "unexpected output: {out:?}");

    let timestamp = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3} ").unwrap();
    assert!(timestamp.is_match(&out), "missing timestamp: {out:?}");
}

#[test]
fn test_class_and_method_fields_override_call_site() {
    let out = capture(formatter(false), || {
        warn!(
            class = "net.snowflake.client.jdbc.SnowflakeConnectionV1",
            method = "close",
            "closing"
        );
    });

    assert!(
        out.contains(" n.s.c.jdbc.SnowflakeConnectionV1 WARN close:"),
        "unexpected output: {out:?}"
    );
    assert!(out.ends_with(" - closing\n"));
}

#[test]
fn test_without_span_method_is_empty() {
    let out = capture(formatter(false), || {
        info!("no span here");
    });

    assert!(out.contains(" INFO :"), "unexpected output: {out:?}");
}

#[test]
fn test_error_dump_is_masked() {
    let out = capture(formatter(true), || {
        let err = AuthError(HandshakeError);
        error!(error = &err as &(dyn std::error::Error + 'static), "login failed");
    });

    assert!(
        out.ends_with(
            " - login failed\nauth rejected token=****\nCaused by: handshake rejected\n\n"
        ),
        "unexpected output: {out:?}"
    );
    assert!(!out.contains("abcdef123456"));
}

#[test]
fn test_error_dropped_when_flag_off() {
    let out = capture(formatter(false), || {
        let err = AuthError(HandshakeError);
        error!(error = &err as &(dyn std::error::Error + 'static), "login failed");
    });

    assert!(out.ends_with(" - login failed\n"));
    assert!(!out.contains("auth rejected"));
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_each_event_is_one_line() {
    let out = capture(formatter(false), || {
        info!("first");
        info!("second");
        info!("third");
    });

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[2].ends_with(" - third"));
}
