pub mod http_fetcher;
pub mod user_agent;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::app::Result;

/// Transport seam for the site.
///
/// Everything above this trait works on page/script text and JSON strings;
/// headers, timeouts, and user-agent handling live in the implementation.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a page or script body as text. Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<String>;

    /// POST a JSON payload and return the response body. A non-success
    /// status surfaces as [`HltbError::SearchFailed`](crate::app::HltbError)
    /// carrying the status and body.
    async fn post_json(&self, url: &str, json: &str) -> Result<String>;
}
