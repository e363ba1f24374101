use async_trait::async_trait;
use iqn_core::Result;
use tracing::warn;

pub mod google;
pub mod noop;

pub use google::GoogleTranslator;
pub use noop::NoopTranslator;

#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns the name of the translation backend
    fn name(&self) -> &str;

    /// Translates `text` into the backend's target language
    async fn translate(&self, text: &str) -> Result<String>;
}

/// Absorbing wrapper used by the pipeline: empty input short-circuits, any
/// backend failure is logged and becomes an empty string. Callers must read
/// `""` as "translation unavailable", never as "source was empty".
pub async fn translate_or_empty(translator: &dyn Translator, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    match translator.translate(text).await {
        Ok(translated) => translated,
        Err(e) => {
            warn!("translation failed ({}): {}", translator.name(), e);
            String::new()
        }
    }
}

pub mod prelude {
    pub use super::{translate_or_empty, Translator};
    pub use iqn_core::{Error, Result};
}
