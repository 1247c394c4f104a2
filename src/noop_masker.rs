use crate::mask::SecretMasker;

/// A masker that returns its input unchanged.
///
/// Useful when the output is redacted further downstream, and for tests
/// that want to see the raw stack dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMasker;

impl SecretMasker for NoopMasker {
    fn mask_secrets(&self, text: &str) -> String {
        text.to_string()
    }
}
