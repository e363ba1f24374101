use async_trait::async_trait;
use iqn_core::{dates, ArticleRecord, Result};
use scraper::{Html, Selector};

use super::{client, Source};

const SOURCE: &str = "Alssaa";
const BASE_URL: &str = "https://alssaa.com/";

/// Headline scrape of alssaa.com: titles and links only, no excerpt, no
/// image, no per-post date in the listing markup.
pub struct AlssaaSource;

impl AlssaaSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Source for AlssaaSource {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headlines() {
        let html = r#"
            <div class="jeg_postblock_content">
                <h3 class="jeg_post_title"><a href="https://alssaa.com/a">عاجل من العراق</a></h3>
            </div>
            <div class="jeg_postblock_content">
                <h3 class="jeg_post_title"><a href="https://alssaa.com/b">خبر ثان</a></h3>
            </div>
        "#;
        let records = parse_listing(html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "عاجل من العراق");
        assert_eq!(records[0].link, "https://alssaa.com/a");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].date, dates::today());
        assert_eq!(records[0].source, "Alssaa");
    }

    #[test]
    fn blank_anchors_are_skipped() {
        let html = r#"<div class="jeg_postblock_content"><h3 class="jeg_post_title"><a href="/x">  </a></h3></div>"#;
        assert!(parse_listing(html).is_empty());
    }
}
