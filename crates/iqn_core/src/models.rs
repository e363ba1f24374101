use serde::{Deserialize, Serialize};

/// One normalized news item, as emitted by every source and consumed by the
/// aggregator. Field names serialize in the camelCase form the front end
/// expects (`titleTranslated`, `descriptionTranslated`).
///
/// `title_translated` and `description_translated` are `None` until the
/// translation augmentation step runs; after it, `Some("")` means the
/// translation service was unreachable, never that the source was empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_translated: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_translated: Option<String>,
    /// Always `YYYY-MM-DD`; lexicographic order equals chronological order.
    pub date: String,
    pub link: String,
    /// Absolute URL, or empty string when the source carries no image.
    pub image: String,
    pub source: String,
    /// Populated by the consumer-side tag derivation, never by the pipeline.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}
