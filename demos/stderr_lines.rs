use tracing::{error, info, info_span};

use sf_line_formatter::init::init_tracing;

#[derive(Debug, thiserror::Error)]
#[error("authentication failed for user scott, password=tiger")]
struct LoginError;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Run with SF_FORMATTER_DUMP_STACKTRACE=true to see the (masked) error dump.
    init_tracing()?;

    let _span = info_span!("open_session").entered();
    info!(account = "acme", "opening session for {{0}}");

    let err = LoginError;
    error!(error = &err as &(dyn std::error::Error + 'static), "login failed");
    Ok(())
}
