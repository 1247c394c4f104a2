use sf_line_formatter::{FixedFlag, LineFormatter, LogEvent, NoLine, SecretMasker, Thrown};
use tracing::Level;

/// Example of plugging in a custom redaction backend by implementing
/// `SecretMasker` directly. Imagine this calls a shared DLP service.
struct UppercaseOnlyMasker;

impl SecretMasker for UppercaseOnlyMasker {
    fn mask_secrets(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| if word.chars().all(|c| c.is_ascii_uppercase()) { "****" } else { word })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("vault rejected key SECRETKEY")]
struct VaultError;

fn main() {
    let formatter = LineFormatter::new()
        .with_masker(UppercaseOnlyMasker)
        .with_stack_trace_flag(FixedFlag(true))
        .with_locator(NoLine);

    let event = LogEvent::new(
        Level::ERROR,
        "com.snowflake.vault.Client",
        "fetch",
        "fetch of {0} failed",
    )
    .with_arg("db-creds")
    .with_thrown(Thrown::from_error(&VaultError));

    print!("{}", formatter.format(&event));
}
