use std::sync::Arc;

use crate::app::Result;
use crate::detail::DetailClient;
use crate::domain::GameEntry;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::search::SearchClient;

/// Public entry point composing the search and detail clients.
pub struct HowLongToBeatService {
    search_client: SearchClient,
    detail_client: DetailClient,
}

impl HowLongToBeatService {
    pub fn new() -> Self {
        Self::with_fetcher(Arc::new(HttpFetcher::new()))
    }

    /// Build against any transport, e.g. a mock in tests.
    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            search_client: SearchClient::new(fetcher.clone()),
            detail_client: DetailClient::new(fetcher),
        }
    }

    /// Search by free-text query. The query splits on whitespace into the
    /// API's search terms; an unknown title yields an empty vec, not an
    /// error.
    pub async fn search(&self, query: &str) -> Result<Vec<GameEntry>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_string).collect();
        self.search_client.search(terms, query).await
    }

    /// Look up one game by its site-internal id and parse its detail page.
    pub async fn detail(&self, id: &str) -> Result<GameEntry> {
        self.detail_client.detail(id).await
    }
}

impl Default for HowLongToBeatService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;
    use crate::site;

    const ROOT_HTML: &str = r#"<html><head>
        <script src="/_next/static/chunks/pages/_app-bbb222.js"></script>
    </head></html>"#;

    #[tokio::test]
    async fn test_search_splits_query_on_whitespace() {
        let fetcher = Arc::new(
            MockFetcher::new()
                .on_get(site::BASE_URL, ROOT_HTML)
                .on_get(
                    "https://howlongtobeat.com/_next/static/chunks/pages/_app-bbb222.js",
                    r#""/api/search/".concat("tok1")"#,
                )
                .on_post(
                    "https://howlongtobeat.com/api/search/tok1",
                    r#"{"count": 0, "data": []}"#,
                ),
        );
        let service = HowLongToBeatService::with_fetcher(fetcher.clone());

        let entries = service.search("dark  souls   remastered").await.unwrap();
        assert!(entries.is_empty());

        let posted = fetcher.posted.lock().unwrap();
        let body: serde_json::Value = serde_json::from_str(&posted[0].1).unwrap();
        assert_eq!(
            body["searchTerms"],
            serde_json::json!(["dark", "souls", "remastered"])
        );
    }

    #[tokio::test]
    async fn test_detail_delegates_to_parser() {
        let fetcher = Arc::new(MockFetcher::new().on_get(
            "https://howlongtobeat.com/game/42",
            r#"<div class="GameHeader_profile_header__x">Some Game</div>"#,
        ));
        let service = HowLongToBeatService::with_fetcher(fetcher);

        let entry = service.detail("42").await.unwrap();
        assert_eq!(entry.id, "42");
        assert_eq!(entry.name, "Some Game");
        assert_eq!(entry.similarity, 1.0);
    }
}
