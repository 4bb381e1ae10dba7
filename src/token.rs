//! API-token discovery.
//!
//! The search endpoint requires a rotating token that is not documented
//! anywhere; it is embedded in the site's client-side script bundles and
//! changes with deployments. Discovery fetches the homepage, collects the
//! `<script src>` candidates, and scans their bodies for the concatenation
//! expression that builds the search URL.
//!
//! The scan runs in two passes: a narrow one over scripts whose path looks
//! like the application bundle, then a broad one over every script if the
//! narrow pass comes up empty. Network or parse failures here are never
//! fatal; an absent token is a normal, retryable outcome.

use std::sync::{Arc, LazyLock};

use futures::future;
use regex::Regex;
use scraper::{Html, Selector};

use crate::fetcher::Fetcher;
use crate::site;

/// Path fragment that marks the application bundle among homepage scripts.
const APP_BUNDLE_MARKER: &str = "_app-";

/// Matches the token inside the bundle source, e.g.
/// `"/api/search/".concat("a1b2c3d4")`.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/api/search/"\.concat\("([a-zA-Z0-9]+)"\)"#).expect("valid token pattern")
});

pub struct TokenDiscovery {
    fetcher: Arc<dyn Fetcher>,
}

impl TokenDiscovery {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// Run the narrow pass, then the broad fallback. `None` means no script
    /// yielded a token; callers decide whether that is fatal.
    pub async fn discover(&self) -> Option<String> {
        if let Some(token) = self.scan_scripts(false).await {
            return Some(token);
        }
        tracing::debug!("narrow token pass found nothing, retrying over all scripts");
        self.scan_scripts(true).await
    }

    /// One discovery pass. With `parse_all_scripts` the candidate set is
    /// every homepage script instead of just the application bundle.
    async fn scan_scripts(&self, parse_all_scripts: bool) -> Option<String> {
        let root = match self.fetcher.get(site::BASE_URL).await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("failed to fetch site root: {}", e);
                return None;
            }
        };

        let urls: Vec<String> = script_srcs(&root, parse_all_scripts)
            .iter()
            .filter_map(|src| site::script_url(src).ok())
            .map(|url| url.to_string())
            .collect();

        // One joint fan-out; bundle counts are small. Individual fetch
        // failures just drop that script from the scan.
        let fetches = urls.iter().map(|url| self.fetcher.get(url));
        let bodies = future::join_all(fetches).await;

        for (url, body) in urls.iter().zip(bodies) {
            match body {
                Ok(text) => {
                    if let Some(token) = find_token(&text) {
                        tracing::debug!("found API token in {}", url);
                        return Some(token);
                    }
                }
                Err(e) => tracing::debug!("failed to fetch script {}: {}", url, e),
            }
        }
        None
    }
}

/// Collect `src` attributes of `<script>` elements, in document order.
fn script_srcs(html: &str, parse_all_scripts: bool) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("script[src]").expect("valid script selector");

    document
        .select(&selector)
        .filter_map(|script| script.value().attr("src"))
        .filter(|src| parse_all_scripts || src.contains(APP_BUNDLE_MARKER))
        .map(str::to_string)
        .collect()
}

/// First token match in a script body, if any.
fn find_token(script: &str) -> Option<String> {
    TOKEN_PATTERN
        .captures(script)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::mock::MockFetcher;

    const ROOT_HTML: &str = r#"<html><head>
        <script src="/_next/static/chunks/framework-aaa111.js"></script>
        <script src="/_next/static/chunks/pages/_app-bbb222.js"></script>
        <script>inline, no src</script>
    </head><body></body></html>"#;

    #[test]
    fn test_script_srcs_narrow_keeps_app_bundle_only() {
        let srcs = script_srcs(ROOT_HTML, false);
        assert_eq!(srcs, vec!["/_next/static/chunks/pages/_app-bbb222.js"]);
    }

    #[test]
    fn test_script_srcs_broad_keeps_all() {
        let srcs = script_srcs(ROOT_HTML, true);
        assert_eq!(srcs.len(), 2);
        assert_eq!(srcs[0], "/_next/static/chunks/framework-aaa111.js");
    }

    #[test]
    fn test_find_token_in_concat_expression() {
        let script = r#"fetch("/api/search/".concat("alpha123"),{method:"POST"})"#;
        assert_eq!(find_token(script), Some("alpha123".to_string()));
    }

    #[test]
    fn test_find_token_absent() {
        assert_eq!(find_token("var x = 1;"), None);
    }

    #[tokio::test]
    async fn test_discover_narrow_pass() {
        let fetcher = MockFetcher::new()
            .on_get(site::BASE_URL, ROOT_HTML)
            .on_get(
                "https://howlongtobeat.com/_next/static/chunks/pages/_app-bbb222.js",
                r#"u="/api/search/".concat("tok9f8e7d")"#,
            );
        let discovery = TokenDiscovery::new(Arc::new(fetcher));
        assert_eq!(discovery.discover().await, Some("tok9f8e7d".to_string()));
    }

    #[tokio::test]
    async fn test_discover_falls_back_to_broad_pass() {
        // Token lives in a script the bundle-name filter skips.
        let fetcher = MockFetcher::new()
            .on_get(site::BASE_URL, ROOT_HTML)
            .on_get(
                "https://howlongtobeat.com/_next/static/chunks/pages/_app-bbb222.js",
                "nothing here",
            )
            .on_get(
                "https://howlongtobeat.com/_next/static/chunks/framework-aaa111.js",
                r#""/api/search/".concat("fallback42")"#,
            );
        let discovery = TokenDiscovery::new(Arc::new(fetcher));
        assert_eq!(discovery.discover().await, Some("fallback42".to_string()));
    }

    #[tokio::test]
    async fn test_discover_swallows_root_fetch_failure() {
        let discovery = TokenDiscovery::new(Arc::new(MockFetcher::new()));
        assert_eq!(discovery.discover().await, None);
    }

    #[tokio::test]
    async fn test_discover_none_when_no_script_matches() {
        let fetcher = MockFetcher::new()
            .on_get(site::BASE_URL, ROOT_HTML)
            .on_get(
                "https://howlongtobeat.com/_next/static/chunks/pages/_app-bbb222.js",
                "var a = 1;",
            )
            .on_get(
                "https://howlongtobeat.com/_next/static/chunks/framework-aaa111.js",
                "var b = 2;",
            );
        let discovery = TokenDiscovery::new(Arc::new(fetcher));
        assert_eq!(discovery.discover().await, None);
    }
}
