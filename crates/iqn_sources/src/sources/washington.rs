use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{absolutize, client, Source};

const SOURCE: &str = "WashingtonInstitute";
const ORIGIN: &str = "https://www.washingtoninstitute.org";
const BASE_URL: &str = "https://www.washingtoninstitute.org/ar";

/// Headline scrape of the Washington Institute's Arabic section. Links in
/// the listing are site-relative and get resolved against the origin.
pub struct WashingtonInstituteSource;

impl WashingtonInstituteSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for WashingtonInstituteSource {
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
    let title_selector = Selector::parse(".views-row .title a").unwrap();

    document
        .select(&title_selector)
        .filter_map(|anchor| {
            let title = anchor.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                return None;
            }
            let href = anchor.value().attr("href").unwrap_or_default();
            Some(ArticleRecord {
                title,
                title_translated: None,
                description: String::new(),
                description_translated: None,
                date: dates::today(),
                link: absolutize(ORIGIN, href),
                image: String::new(),
                source: SOURCE.to_string(),
                tags: Vec::new(),
            })
        })
        .collect()
}
