use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use iqn_core::{ArticleRecord, KeywordFilter, Result};
use iqn_translate::{translate_or_empty, Translator};
use tracing::{debug, warn};

use crate::sources::BoxedSource;

const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Orchestrates one pipeline run: fan out every registered source, merge,
/// filter by keyword relevance, optionally translate titles, sort by date
/// descending. Stateless across runs; every invocation fetches fresh.
pub struct Aggregator {
    sources: Vec<BoxedSource>,
    filter: KeywordFilter,
    translator: Option<Arc<dyn Translator>>,
    fetch_timeout: Duration,
}

impl Aggregator {
    pub fn new(sources: Vec<BoxedSource>, filter: KeywordFilter) -> Self {
        Self {
            sources,
            filter,
            translator: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Enables title augmentation: every surviving record gets its title
    /// translated. Without a translator records pass through untouched.
    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Runs the pipeline. Per-source and per-translation failures are
    /// absorbed here; an all-failed round is an empty list, not an error.
    pub async fn collect(&self) -> Result<Vec<ArticleRecord>> {
        let fetches = self.sources.iter().map(|source| async move {
            match tokio::time::timeout(self.fetch_timeout, source.fetch()).await {
                Ok(Ok(records)) => {
                    debug!("{} contributed {} records", source.name(), records.len());
                    records
                }
                Ok(Err(e)) => {
                    warn!("{} failed: {}", source.name(), e);
                    Vec::new()
                }
                Err(_) => {
                    warn!(
                        "{} timed out after {}s",
                        source.name(),
                        self.fetch_timeout.as_secs()
                    );
                    Vec::new()
                }
            }
        });

        // Await-all join: result order follows registration order, never
        // completion order.
        let batches = join_all(fetches).await;

        let mut records: Vec<ArticleRecord> = batches
            .into_iter()
            .flatten()
            .filter(|record| self.filter.matches_record(record))
            .collect();

        if let Some(translator) = &self.translator {
            let translations = join_all(records.iter().map(|record| {
                let translator = translator.clone();
                async move {
                    if record.title_translated.is_some() {
                        // Already augmented at the source (deep fetch);
                        // existing fields are never overwritten.
                        None
                    } else {
                        Some(translate_or_empty(translator.as_ref(), &record.title).await)
                    }
                }
            }))
            .await;

            for (record, translated) in records.iter_mut().zip(translations) {
                if let Some(translated) = translated {
                    record.title_translated = Some(translated);
                }
            }
        }

        // Dates are normalized `YYYY-MM-DD`, so lexicographic order is
        // chronological order; the sort is stable, so equal dates keep
        // registration order.
        records.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(records)
    }
}
