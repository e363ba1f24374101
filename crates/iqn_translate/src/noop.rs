use async_trait::async_trait;
use iqn_core::Result;

use super::Translator;

/// Backend that translates nothing. Stands in for the real service when the
/// augmented fields must exist but no outbound calls are wanted.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    fn name(&self) -> &str {
        "noop"
    }

    async fn translate(&self, _text: &str) -> Result<String> {
        Ok(String::new())
    }
}
