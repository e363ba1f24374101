use crate::models::ArticleRecord;

/// Topical keywords deciding whether an item is relevant. Matching is a
/// literal substring test: no normalization, no stemming, no word
/// boundaries.
const DEFAULT_KEYWORDS: &[&str] = &[
    "العراق",
    "الحشد",
    "كتائب",
    "تفجير",
    "عبوة",
    "الحدود",
    "تهريب",
    "ميليشيا",
    "اشتباك",
    "صاروخ",
    "درون",
    "عمليات",
    "قوات",
    "انتشار",
    "انسحاب",
    "تعزيزات",
    "استخبارات",
    "أمن",
    "نينوى",
    "كركوك",
];

#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// True if any keyword occurs in `text`. Empty text never matches.
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.keywords.iter().any(|kw| text.contains(kw.as_str()))
    }

    pub fn matches_record(&self, record: &ArticleRecord) -> bool {
        self.matches(&record.title) || self.matches(&record.description)
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|kw| kw.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, description: &str) -> ArticleRecord {
        ArticleRecord {
            title: title.to_string(),
            title_translated: None,
            description: description.to_string(),
            description_translated: None,
            date: "2024-01-01".to_string(),
            link: String::new(),
            image: String::new(),
            source: "test".to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn matches_keyword_in_title() {
        let filter = KeywordFilter::default();
        assert!(filter.matches_record(&record("انفجار في العراق", "")));
    }

    #[test]
    fn rejects_unrelated_text() {
        let filter = KeywordFilter::default();
        assert!(!filter.matches_record(&record("hello world", "")));
    }

    #[test]
    fn matches_keyword_in_description_only() {
        let filter = KeywordFilter::default();
        assert!(filter.matches_record(&record("hello", "قوات على الحدود")));
    }

    #[test]
    fn empty_text_never_matches() {
        let filter = KeywordFilter::default();
        assert!(!filter.matches(""));
    }

    #[test]
    fn substring_match_needs_no_word_boundary() {
        let filter = KeywordFilter::new(vec!["أمن".to_string()]);
        assert!(filter.matches("الأمني"));
    }

    #[test]
    fn injected_keywords_replace_defaults() {
        let filter = KeywordFilter::new(vec!["foo".to_string()]);
        assert!(filter.matches("foobar"));
        assert!(!filter.matches("العراق"));
    }
}
