use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::app::{HltbError, Result};
use crate::fetcher::Fetcher;

/// Canned-response fetcher for unit tests. Unknown URLs fail with a 404.
#[derive(Default)]
pub struct MockFetcher {
    get_routes: HashMap<String, String>,
    post_routes: HashMap<String, String>,
    /// Bodies of POST requests, for payload assertions.
    pub posted: Mutex<Vec<(String, String)>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(mut self, url: &str, body: &str) -> Self {
        self.get_routes.insert(url.to_string(), body.to_string());
        self
    }

    pub fn on_post(mut self, url: &str, body: &str) -> Self {
        self.post_routes.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn get(&self, url: &str) -> Result<String> {
        self.get_routes
            .get(url)
            .cloned()
            .ok_or_else(|| HltbError::DetailFetch(format!("no mock route for GET {url}")))
    }

    async fn post_json(&self, url: &str, json: &str) -> Result<String> {
        self.posted
            .lock()
            .expect("mock lock poisoned")
            .push((url.to_string(), json.to_string()));
        self.post_routes
            .get(url)
            .cloned()
            .ok_or(HltbError::SearchFailed {
                status: 404,
                body: String::new(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_and_recording() {
        let fetcher = MockFetcher::new()
            .on_get("https://example.com/a", "body-a")
            .on_post("https://example.com/b", "{}");

        tokio_test::block_on(async {
            assert_eq!(fetcher.get("https://example.com/a").await.unwrap(), "body-a");
            assert!(fetcher.get("https://example.com/missing").await.is_err());

            fetcher
                .post_json("https://example.com/b", r#"{"q":1}"#)
                .await
                .unwrap();
            let posted = fetcher.posted.lock().unwrap();
            assert_eq!(posted[0], ("https://example.com/b".into(), r#"{"q":1}"#.into()));
        });
    }
}
