use std::sync::Arc;

use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use iqn_translate::{translate_or_empty, Translator};
use scraper::{Html, Selector};

use super::{absolutize, client, Source};

const SOURCE: &str = "אל-חאשד";
const BASE_URL: &str = "https://al-hashed.gov.iq/";
const DEFAULT_ARTICLE_URL: &str = "https://al-hashed.gov.iq/?p=529880";

/// Listing scrape of al-hashed.gov.iq.
pub struct AlHashedSource;

impl AlHashedSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for AlHashedSource {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>> {
        let html = client::plain()?
            .get(BASE_URL)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(parse_listing(&html))
    }
}

fn parse_listing(html: &str) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let item_selector = Selector::parse("li.post-item.tie-standard").unwrap();
    let title_selector = Selector::parse(".post-title a").unwrap();
    let excerpt_selector = Selector::parse(".post-excerpt").unwrap();
    let date_selector = Selector::parse("time.entry-date").unwrap();
    let image_selector = Selector::parse("img").unwrap();

    let mut news = Vec::new();
    for item in document.select(&item_selector) {
        let Some(anchor) = item.select(&title_selector).next() else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        let link = anchor
            .value()
            .attr("href")
            .unwrap_or_default()
            .to_string();
        let description = item
            .select(&excerpt_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let date = item
            .select(&date_selector)
            .next()
            .and_then(|el| el.value().attr("datetime"))
            .map(dates::normalize_or_today)
            .unwrap_or_else(dates::today);
        let image = item
            .select(&image_selector)
            .next()
            .and_then(|el| el.value().attr("src"))
            .map(|src| absolutize(BASE_URL, src))
            .unwrap_or_default();

        news.push(ArticleRecord {
            title,
            title_translated: None,
            description,
            description_translated: None,
            date,
            link,
            image,
            source: SOURCE.to_string(),
            tags: Vec::new(),
        });
    }
    news
}

/// Deep fetch of one al-hashed.gov.iq article: full page parse plus
/// translation of both title and description, emitted as a single record
/// with all four title/description fields present.
pub struct AlHashedArticleSource {
    url: String,
    translator: Arc<dyn Translator>,
}

impl AlHashedArticleSource {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self::for_url(DEFAULT_ARTICLE_URL, translator)
    }

    pub fn for_url(url: &str, translator: Arc<dyn Translator>) -> Self {
        Self {
            url: url.to_string(),
            translator,
        }
    }

    /// Attaches both translations; the translated fields are always present
    /// on the emitted record, empty when the service is unreachable.
    async fn build_record(&self, page: ArticlePage) -> ArticleRecord {
        let (title_translated, description_translated) = tokio::join!(
            translate_or_empty(self.translator.as_ref(), &page.title),
            translate_or_empty(self.translator.as_ref(), &page.description),
        );

        ArticleRecord {
            title: page.title,
            title_translated: Some(title_translated),
            description: page.description,
            description_translated: Some(description_translated),
            date: page.date,
            link: self.url.clone(),
            image: page.image,
            source: SOURCE.to_string(),
            tags: Vec::new(),
        }
    }
}

#[async_trait]
impl Source for AlHashedArticleSource {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>> {
        let html = client::plain()?
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let page = parse_article(&html);
        Ok(vec![self.build_record(page).await])
    }
}

struct ArticlePage {
    title: String,
    description: String,
    date: String,
    image: String,
}

fn parse_article(html: &str) -> ArticlePage {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("h1.entry-title").unwrap();
    let paragraph_selector = Selector::parse("div.td-post-content p").unwrap();
    let content_selector = Selector::parse("div.td-post-content").unwrap();
    let date_selector = Selector::parse("time.entry-date").unwrap();
    let image_selector = Selector::parse("div.td-post-featured-image img").unwrap();

    let title = document
        .select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let mut description = document
        .select(&paragraph_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();
    if description.is_empty() {
        // No leading paragraph: first substantial body line, else the first
        // 200 characters of the body text.
        let content = document
            .select(&content_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        description = content
            .lines()
            .map(str::trim)
            .find(|line| line.chars().count() > 20)
            .map(str::to_string)
            .unwrap_or_else(|| content.chars().take(200).collect());
    }

    let date = document
        .select(&date_selector)
        .next()
        .and_then(|el| el.value().attr("datetime"))
        .map(dates::normalize_or_today)
        .unwrap_or_else(dates::today);

    let image = document
        .select(&image_selector)
        .next()
        .and_then(|el| el.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    ArticlePage {
        title,
        description,
        date,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iqn_core::Error;
    use iqn_translate::NoopTranslator;

    const LISTING_FIXTURE: &str = r#"
        <ul>
            <li class="post-item tie-standard">
                <img src="/wp-content/uploads/a.jpg">
                <h2 class="post-title"><a href="https://al-hashed.gov.iq/?p=1">الحشد الشعبي يعلن عملية</a></h2>
                <p class="post-excerpt">تفاصيل العملية في نينوى</p>
                <time class="entry-date" datetime="2024-01-02T09:30:00+03:00">2 يناير</time>
            </li>
            <li class="post-item tie-standard">
                <h2 class="post-title"><a href="https://al-hashed.gov.iq/?p=2">خبر بدون تاريخ</a></h2>
            </li>
        </ul>
    "#;

    #[test]
    fn parses_listing_items() {
        let records = parse_listing(LISTING_FIXTURE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "الحشد الشعبي يعلن عملية");
        assert_eq!(records[0].date, "2024-01-02");
        assert_eq!(records[0].source, "אל-חאשד");
    }

    #[test]
    fn relative_image_urls_are_resolved_against_the_site_base() {
        let records = parse_listing(LISTING_FIXTURE);
        assert_eq!(
            records[0].image,
            "https://al-hashed.gov.iq/wp-content/uploads/a.jpg"
        );
    }

    #[test]
    fn missing_date_falls_back_to_today() {
        let records = parse_listing(LISTING_FIXTURE);
        assert_eq!(records[1].date, dates::today());
    }

    const ARTICLE_FIXTURE: &str = r#"
        <h1 class="entry-title">بيان صادر عن هيئة الحشد الشعبي</h1>
        <time class="entry-date" datetime="2024-01-05T08:00:00+03:00"></time>
        <div class="td-post-featured-image"><img src="https://al-hashed.gov.iq/img/main.jpg"></div>
        <div class="td-post-content">
            <p>أعلنت هيئة الحشد الشعبي عن انطلاق عملية أمنية واسعة.</p>
            <p>وأضاف البيان تفاصيل أخرى.</p>
        </div>
    "#;

    #[test]
    fn parses_full_article_page() {
        let page = parse_article(ARTICLE_FIXTURE);
        assert_eq!(page.title, "بيان صادر عن هيئة الحشد الشعبي");
        assert_eq!(
            page.description,
            "أعلنت هيئة الحشد الشعبي عن انطلاق عملية أمنية واسعة."
        );
        assert_eq!(page.date, "2024-01-05");
        assert_eq!(page.image, "https://al-hashed.gov.iq/img/main.jpg");
    }

    #[test]
    fn description_falls_back_to_first_substantial_body_line() {
        let html = r#"
            <h1 class="entry-title">عنوان</h1>
            <div class="td-post-content">سطر قصير
مقطع طويل بما يكفي ليكون وصفا مناسبا للمقال المنشور</div>
        "#;
        let page = parse_article(html);
        assert_eq!(
            page.description,
            "مقطع طويل بما يكفي ليكون وصفا مناسبا للمقال المنشور"
        );
    }

    struct BrokenTranslator;

    #[async_trait]
    impl Translator for BrokenTranslator {
        fn name(&self) -> &str {
            "broken"
        }

        async fn translate(&self, _text: &str) -> Result<String> {
            Err(Error::Translate("unreachable".to_string()))
        }
    }

    #[test]
    fn default_target_is_the_known_article() {
        let source = AlHashedArticleSource::new(Arc::new(NoopTranslator));
        assert_eq!(source.url, DEFAULT_ARTICLE_URL);
        assert_eq!(source.name(), "אל-חאשד");
    }

    #[test]
    fn parameterized_target_overrides_the_default() {
        let source =
            AlHashedArticleSource::for_url("https://al-hashed.gov.iq/?p=7", Arc::new(NoopTranslator));
        assert_eq!(source.url, "https://al-hashed.gov.iq/?p=7");
    }

    #[tokio::test]
    async fn emits_one_record_with_both_translation_keys_present() {
        let source = AlHashedArticleSource::new(Arc::new(NoopTranslator));
        let record = source.build_record(parse_article(ARTICLE_FIXTURE)).await;
        assert!(record.title_translated.is_some());
        assert!(record.description_translated.is_some());
        assert_eq!(record.link, DEFAULT_ARTICLE_URL);
        assert_eq!(record.date, "2024-01-05");
    }

    #[tokio::test]
    async fn unreachable_translator_leaves_empty_but_present_translations() {
        let source = AlHashedArticleSource::new(Arc::new(BrokenTranslator));
        let record = source.build_record(parse_article(ARTICLE_FIXTURE)).await;
        assert_eq!(record.title_translated.as_deref(), Some(""));
        assert_eq!(record.description_translated.as_deref(), Some(""));
        // The untranslated fields stay intact.
        assert_eq!(record.title, "بيان صادر عن هيئة الحشد الشعبي");
    }
}
