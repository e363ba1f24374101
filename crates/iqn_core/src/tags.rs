use crate::models::ArticleRecord;

/// Stop words excluded from title-derived tags.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "של", "עם", "על", "זה", "הוא", "היא", "את", "או", "ו", "לא", "כן", "מה", "מי", "ה",
];

const DEFAULT_LOCALE_TAG: &str = "עיראק";

/// Consumer-side tag derivation: source label, a fixed locale tag, then the
/// significant words of the title. The pipeline itself never calls this.
#[derive(Debug, Clone)]
pub struct TagRules {
    locale_tag: String,
    stop_words: Vec<String>,
}

impl TagRules {
    pub fn new(locale_tag: String, stop_words: Vec<String>) -> Self {
        Self {
            locale_tag,
            stop_words,
        }
    }

    /// Tags are deduplicated and keep first-seen order.
    pub fn derive(&self, record: &ArticleRecord) -> Vec<String> {
        let mut tags = Vec::new();
        if !record.source.is_empty() {
            push_unique(&mut tags, &record.source);
        }
        push_unique(&mut tags, &self.locale_tag);
        for word in record.title.split_whitespace() {
            if word.chars().count() > 2 && !self.stop_words.iter().any(|sw| sw == word) {
                push_unique(&mut tags, word);
            }
        }
        tags
    }
}

impl Default for TagRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOCALE_TAG.to_string(),
            DEFAULT_STOP_WORDS.iter().map(|sw| sw.to_string()).collect(),
        )
    }
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
