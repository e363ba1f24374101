use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{client, Source};

const SOURCE: &str = "SaidShuhada";
const BASE_URL: &str = "https://saidshuhada.iq/?cat=27";

/// Headline scrape of the saidshuhada.iq martyrs category.
pub struct SaidShuhadaSource;

impl SaidShuhadaSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for SaidShuhadaSource {
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
    let title_selector = Selector::parse(".post-title a").unwrap();

    document
        .select(&title_selector)
        .filter_map(|anchor| {
            let title = anchor.text().collect::<String>().trim().to_string();
            if title.is_empty() {
                return None;
            }
            Some(ArticleRecord {
                title,
                title_translated: None,
                description: String::new(),
                description_translated: None,
                date: dates::today(),
                link: anchor
                    .value()
                    .attr("href")
                    .unwrap_or_default()
                    .to_string(),
                image: String::new(),
                source: SOURCE.to_string(),
                tags: Vec::new(),
            })
        })
        .collect()
}
