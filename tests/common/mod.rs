// Shared helpers for integration tests.
#![allow(dead_code)]

use sf_line_formatter::init::fmt_layer;
use sf_line_formatter::LineFormatter;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// In-memory writer that collects everything the fmt layer writes.
#[derive(Clone, Default)]
pub struct CapturedLines(Arc<Mutex<Vec<u8>>>);

impl CapturedLines {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLines {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLines {
    type Writer = CapturedLines;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber that formats through `formatter` and return
/// everything it wrote.
pub fn capture<F: FnOnce()>(formatter: LineFormatter, f: F) -> String {
    let lines = CapturedLines::default();
    let subscriber = Registry::default().with(fmt_layer(formatter).with_writer(lines.clone()));
    tracing::subscriber::with_default(subscriber, f);
    lines.contents()
}
