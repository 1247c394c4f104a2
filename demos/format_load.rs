use std::time::Instant;

use sf_line_formatter::{FixedFlag, LineFormatter, LogEvent, NoLine, StackWalk};
use tracing::Level;

fn run(label: &str, formatter: &LineFormatter, n: u64) {
    let start = Instant::now();
    let mut bytes = 0usize;

    for i in 0..n {
        let event = LogEvent::new(
            Level::INFO,
            "net.snowflake.client.core.SFSession",
            "open",
            "iteration {0}",
        )
        .with_arg(i);
        bytes += formatter.format(&event).len();
    }

    let elapsed = start.elapsed();
    println!(
        "{}: formatted {} events ({} bytes) in {:?} (~{:.0} ev/s)",
        label,
        n,
        bytes,
        elapsed,
        n as f64 / elapsed.as_secs_f64()
    );
}

fn main() {
    let base = LineFormatter::new().with_stack_trace_flag(FixedFlag(false));

    run("no line lookup", &base.clone().with_locator(NoLine), 100_000);
    // Stack walking captures and symbolizes a backtrace per event.
    run("stack walk", &base.with_locator(StackWalk), 1_000);
}
