use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::Client;

use crate::app::{HltbError, Result};
use crate::fetcher::{user_agent, Fetcher};
use crate::site;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent::random())
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(REFERER, site::REFERER_HEADER)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    async fn post_json(&self, url: &str, json: &str) -> Result<String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_static(site::BASE_URL));
        headers.insert(REFERER, HeaderValue::from_static(site::REFERER_HEADER));

        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(json.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(HltbError::SearchFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
