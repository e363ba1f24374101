use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{client, Source};

const SOURCE: &str = "ISWNews";
const BASE_URL: &str = "https://english.iswnews.com/category/iraq/";

/// Date formats the site prints in its post metadata, tried in order.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%d/%m/%Y"];

/// Category scrape of english.iswnews.com. Unlike the other sites, the
/// listing prints dates as visible text rather than a `datetime` attribute.
pub struct IswNewsSource;

impl IswNewsSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for IswNewsSource {
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
    let post_selector = Selector::parse(".post-listing .post").unwrap();
    let title_selector = Selector::parse(".post-title a").unwrap();
    let excerpt_selector = Selector::parse(".post-content p").unwrap();
    let date_selector = Selector::parse(".post-meta .post-date").unwrap();

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
        let date = post
            .select(&date_selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .and_then(|text| dates::parse_with_formats(&text, DATE_FORMATS))
            .unwrap_or_else(dates::today);

        news.push(ArticleRecord {
            title,
            title_translated: None,
            description,
            description_translated: None,
            date,
            link,
            image: String::new(),
            source: SOURCE.to_string(),
            tags: Vec::new(),
        });
    }
    news
}
