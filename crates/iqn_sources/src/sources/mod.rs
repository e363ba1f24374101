use std::sync::Arc;

use async_trait::async_trait;
use iqn_core::{ArticleRecord, Result};
use iqn_translate::Translator;

pub mod alhashed;
pub mod alssaa;
pub mod amaj24;
pub mod feed;
pub mod iraqinews;
pub mod iswnews;
pub mod saidshuhada;
pub mod washington;

pub use alhashed::{AlHashedArticleSource, AlHashedSource};
pub use alssaa::AlssaaSource;
pub use amaj24::Amaj24Source;
pub use feed::FeedSource;
pub use iraqinews::IraqiNewsSource;
pub use iswnews::IswNewsSource;
pub use saidshuhada::SaidShuhadaSource;
pub use washington::WashingtonInstituteSource;

#[async_trait]
pub trait Source: Send + Sync {
    /// Returns the fixed label identifying this source
    fn name(&self) -> &str;

    /// Fetches the source's current listing and returns normalized records,
    /// in document order. Errors are absorbed by the aggregator, so one
    /// broken site never fails the round.
    async fn fetch(&self) -> Result<Vec<ArticleRecord>>;
}

pub type BoxedSource = Box<dyn Source>;

/// The full registry, in fixed registration order. The single-article deep
/// fetch needs the translator handle; everything else is self-contained.
pub fn default_sources(translator: Arc<dyn Translator>) -> Vec<BoxedSource> {
    vec![
        Box::new(IraqiNewsSource::new()),
        Box::new(AlHashedSource::new()),
        Box::new(AlHashedArticleSource::new(translator)),
        Box::new(AlssaaSource::new()),
        Box::new(Amaj24Source::new()),
        Box::new(SaidShuhadaSource::new()),
        Box::new(WashingtonInstituteSource::new()),
        Box::new(IswNewsSource::new()),
        Box::new(FeedSource::new(
            "AlJazeera",
            "https://www.aljazeera.com/xml/rss/all.xml",
        )),
    ]
}

/// Common utilities for sources
pub(crate) mod client {
    use iqn_core::Result;
    use reqwest::Client;
    use std::time::Duration;

    /// Ceiling for one upstream fetch, so a hung site cannot stall the
    /// whole pipeline join.
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

    const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    pub fn plain() -> Result<Client> {
        Ok(Client::builder().timeout(FETCH_TIMEOUT).build()?)
    }

    /// Client presenting a realistic browser User-Agent, for sites that
    /// block non-browser clients.
    pub fn browser() -> Result<Client> {
        Ok(Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()?)
    }
}

/// Resolve a possibly-relative URL against a site base. Values that already
/// carry a scheme pass through untouched; empty stays empty.
pub(crate) fn absolutize(base: &str, raw: &str) -> String {
    if raw.is_empty() || raw.starts_with("http") {
        return raw.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        raw.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqn_translate::NoopTranslator;

    #[test]
    fn absolutize_leaves_absolute_urls_alone() {
        assert_eq!(
            absolutize("https://al-hashed.gov.iq/", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn absolutize_joins_relative_paths() {
        assert_eq!(
            absolutize("https://al-hashed.gov.iq/", "/wp-content/a.jpg"),
            "https://al-hashed.gov.iq/wp-content/a.jpg"
        );
        assert_eq!(
            absolutize("https://al-hashed.gov.iq", "wp-content/a.jpg"),
            "https://al-hashed.gov.iq/wp-content/a.jpg"
        );
    }

    #[test]
    fn absolutize_keeps_empty_empty() {
        assert_eq!(absolutize("https://al-hashed.gov.iq/", ""), "");
    }

    #[test]
    fn default_registry_has_fixed_order() {
        let sources = default_sources(Arc::new(NoopTranslator));
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "IraqiNews",
                "אל-חאשד",
                "אל-חאשד",
                "Alssaa",
                "Amaj24News",
                "SaidShuhada",
                "WashingtonInstitute",
                "ISWNews",
                "AlJazeera",
            ]
        );
    }
}
