use async_trait::async_trait;
use chrono::Utc;
use iqn_core::{dates, ArticleRecord, Error, Result};

use super::{client, Source};

/// Feed-based source: one RSS 2.0 or Atom document parsed into records.
/// Feeds carry no images.
pub struct FeedSource {
    name: String,
    url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl Source for FeedSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<ArticleRecord>> {
        let bytes = client::plain()?
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        parse_bytes(&self.name, &bytes)
    }
}

/// Try RSS 2.0 first, then Atom; a document parsing as neither is an error.
fn parse_bytes(label: &str, bytes: &[u8]) -> Result<Vec<ArticleRecord>> {
    if let Ok(channel) = rss::Channel::read_from(bytes) {
        return Ok(parse_rss(label, &channel));
    }
    if let Ok(feed) = atom_syndication::Feed::read_from(bytes) {
        return Ok(parse_atom(label, &feed));
    }
    Err(Error::Feed(format!("document is neither RSS nor Atom ({label})")))
}

fn parse_rss(label: &str, channel: &rss::Channel) -> Vec<ArticleRecord> {
    channel
        .items()
        .iter()
        .map(|item| ArticleRecord {
            title: item.title().unwrap_or_default().trim().to_string(),
            title_translated: None,
            description: item.description().unwrap_or_default().trim().to_string(),
            description_translated: None,
            date: item
                .pub_date()
                .map(dates::normalize_or_today)
                .unwrap_or_else(dates::today),
            link: item.link().unwrap_or_default().to_string(),
            image: String::new(),
            source: label.to_string(),
            tags: Vec::new(),
        })
        .collect()
}

fn parse_atom(label: &str, feed: &atom_syndication::Feed) -> Vec<ArticleRecord> {
    feed.entries()
        .iter()
        .map(|entry| {
            // `updated` is mandatory in Atom, so there is always a date.
            let date = entry
                .published()
                .unwrap_or_else(|| entry.updated())
                .with_timezone(&Utc)
                .format(dates::DATE_FMT)
                .to_string();

            ArticleRecord {
                title: entry.title().as_str().trim().to_string(),
                title_translated: None,
                description: entry
                    .summary()
                    .map(|s| s.as_str().trim().to_string())
                    .unwrap_or_default(),
                description_translated: None,
                date,
                link: entry
                    .links()
                    .first()
                    .map(|l| l.href().to_string())
                    .unwrap_or_default(),
                image: String::new(),
                source: label.to_string(),
                tags: Vec::new(),
            }
        })
        .collect()
}
