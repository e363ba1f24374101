use std::time::Duration;

use async_trait::async_trait;
use iqn_core::{Error, Result};
use reqwest::Client;
use serde_json::Value;

use super::Translator;

const BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the unauthenticated Google Translate (gtx) endpoint. Source
/// language is auto-detected; the target language is fixed per instance.
pub struct GoogleTranslator {
    client: Client,
    target: String,
}

impl GoogleTranslator {
    pub fn new(target: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            target: target.to_string(),
        })
    }

    /// Translator for the deployment's fixed target language (Hebrew).
    pub fn hebrew() -> Result<Self> {
        Self::new("he")
    }

    /// The gtx response is a nested array; each first-level entry's first
    /// element is one translated segment. Long input gets chunked by the
    /// service, so the segments are joined back with spaces.
    fn decode(payload: &Value) -> Result<String> {
        let segments = payload
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Translate("unexpected response shape".to_string()))?;

        Ok(segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "google-gtx"
    }

    async fn translate(&self, text: &str) -> Result<String> {
        let payload: Value = self
            .client
            .get(BASE_URL)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", self.target.as_str()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Self::decode(&payload)
    }
}
