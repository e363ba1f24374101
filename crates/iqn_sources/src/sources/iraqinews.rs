use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{client, Source};

const SOURCE: &str = "IraqiNews";
const BASE_URL: &str = "https://www.iraqinews.com/";

/// Front-page scrape of iraqinews.com. The site rejects non-browser
/// clients, so the fetch carries a browser User-Agent.
pub struct IraqiNewsSource;

impl IraqiNewsSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for IraqiNewsSource {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>> {
        let html = client::browser()?
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
    let post_selector = Selector::parse("article.jeg_post").unwrap();
    let title_selector = Selector::parse(".jeg_post_title a").unwrap();
    let excerpt_selector = Selector::parse(".jeg_post_excerpt").unwrap();
    let image_selector = Selector::parse("img").unwrap();

    let mut news = Vec::new();
    for post in document.select(&post_selector) {
        let Some(anchor) = post.select(&title_selector).next() else {
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
        let description = post
            .select(&excerpt_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let image = post
            .select(&image_selector)
            .next()
            .and_then(|el| el.value().attr("src"))
            .unwrap_or_default()
            .to_string();

        news.push(ArticleRecord {
            title,
            title_translated: None,
            description,
            description_translated: None,
            // The listing markup exposes no per-post date.
            date: dates::today(),
            link,
            image,
            source: SOURCE.to_string(),
            tags: Vec::new(),
        });
    }
    news
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <article class="jeg_post">
            <img src="https://cdn.iraqinews.com/a.jpg">
            <div class="jeg_postblock_content">
                <h3 class="jeg_post_title"><a href="https://www.iraqinews.com/a">قوات الأمن في بغداد</a></h3>
                <div class="jeg_post_excerpt">تفاصيل العملية</div>
            </div>
        </article>
        <article class="jeg_post">
            <div class="jeg_postblock_content">
                <h3 class="jeg_post_title"><a href="https://www.iraqinews.com/b">خبر آخر</a></h3>
            </div>
        </article>
        <article class="jeg_post"></article>
    "#;

    #[test]
    fn parses_posts_in_document_order() {
        let records = parse_listing(FIXTURE);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "قوات الأمن في بغداد");
        assert_eq!(records[0].link, "https://www.iraqinews.com/a");
        assert_eq!(records[0].description, "تفاصيل العملية");
        assert_eq!(records[0].image, "https://cdn.iraqinews.com/a.jpg");
        assert_eq!(records[0].source, "IraqiNews");
        assert_eq!(records[0].date, dates::today());
    }

    #[test]
    fn missing_excerpt_and_image_yield_empty_strings() {
        let records = parse_listing(FIXTURE);
        assert_eq!(records[1].description, "");
        assert_eq!(records[1].image, "");
    }

    #[test]
    fn posts_without_a_title_anchor_are_skipped() {
        // The third block has no title anchor at all.
        assert_eq!(parse_listing(FIXTURE).len(), 2);
    }

    #[test]
    fn empty_document_yields_no_records() {
        assert!(parse_listing("<html><body></body></html>").is_empty());
    }
}
