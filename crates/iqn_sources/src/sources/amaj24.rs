use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{client, Source};

const SOURCE: &str = "Amaj24News";
const BASE_URL: &str = "https://amaj24news.com/";

/// Headline scrape of amaj24news.com, same theme markup as alssaa.com.
pub struct Amaj24Source;

impl Amaj24Source {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for Amaj24Source {
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
    let title_selector = Selector::parse(".jeg_postblock_content .jeg_post_title a").unwrap();

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
