//! Search request construction, response schema, and result mapping.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::app::{HltbError, Result};
use crate::domain::{GameEntry, TimeCategory};
use crate::fetcher::Fetcher;
use crate::similarity;
use crate::site;
use crate::token::TokenDiscovery;

/// Search payload for the site's private API.
///
/// Built fresh for every request; only the search terms vary, everything
/// else is the fixed shape the site's own frontend sends.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    search_type: &'static str,
    search_terms: Vec<String>,
    search_page: u32,
    size: u32,
    search_options: SearchOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOptions {
    games: GameOptions,
    users: UserOptions,
    filter: &'static str,
    sort: u32,
    randomizer: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GameOptions {
    user_id: u32,
    platform: &'static str,
    sort_category: &'static str,
    range_category: &'static str,
    range_time: RangeTime,
    gameplay: GameplayOptions,
    modifier: &'static str,
}

#[derive(Debug, Clone, Serialize)]
struct RangeTime {
    min: u32,
    max: u32,
}

#[derive(Debug, Clone, Serialize)]
struct GameplayOptions {
    perspective: &'static str,
    flow: &'static str,
    genre: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserOptions {
    sort_category: &'static str,
}

impl SearchRequest {
    pub fn new(search_terms: Vec<String>) -> Self {
        Self {
            search_type: "games",
            search_terms,
            search_page: 1,
            size: 20,
            search_options: SearchOptions {
                games: GameOptions {
                    user_id: 0,
                    platform: "",
                    sort_category: "popular",
                    range_category: "main",
                    range_time: RangeTime { min: 0, max: 0 },
                    gameplay: GameplayOptions {
                        perspective: "",
                        flow: "",
                        genre: "",
                    },
                    modifier: "",
                },
                users: UserOptions {
                    sort_category: "postcount",
                },
                filter: "",
                sort: 0,
                randomizer: 0,
            },
        }
    }
}

/// Typed boundary for the search API's JSON. Unknown fields are dropped,
/// missing optional fields defaulted, here and nowhere else.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub data: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub game_id: u64,
    pub game_name: String,
    #[serde(default)]
    pub profile_platform: Option<String>,
    #[serde(default)]
    pub game_image: Option<String>,
    #[serde(default)]
    pub comp_main: u64,
    #[serde(default)]
    pub comp_plus: u64,
    #[serde(default)]
    pub comp_100: u64,
}

/// Runs token discovery, submits the search, and maps raw results into
/// [`GameEntry`] records.
pub struct SearchClient {
    fetcher: Arc<dyn Fetcher>,
    discovery: TokenDiscovery,
}

impl SearchClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let discovery = TokenDiscovery::new(fetcher.clone());
        Self { fetcher, discovery }
    }

    /// Search with pre-split query tokens. `query` is the original joined
    /// string, used for similarity scoring and echoed on every entry.
    pub async fn search(&self, terms: Vec<String>, query: &str) -> Result<Vec<GameEntry>> {
        let token = self
            .discovery
            .discover()
            .await
            .ok_or(HltbError::TokenNotFound)?;

        let url = site::search_url(&token)?;
        let payload = serde_json::to_string(&SearchRequest::new(terms))?;
        let body = self.fetcher.post_json(url.as_str(), &payload).await?;

        let response: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!("search for {:?} returned {} results", query, response.count);

        Ok(response
            .data
            .into_iter()
            .map(|result| map_result(result, query))
            .collect())
    }
}

/// Map one raw API result onto the normalized record.
///
/// API durations are second counts; search results round to whole hours
/// (only detail pages carry half-hour granularity). The API returns no
/// per-game labels, so entries get the frontend's fixed set.
fn map_result(result: SearchResult, query: &str) -> GameEntry {
    GameEntry {
        id: result.game_id.to_string(),
        similarity: similarity::score(&result.game_name, query),
        description: String::new(),
        platforms: result
            .profile_platform
            .as_deref()
            .map(|platforms| platforms.split(", ").map(str::to_string).collect())
            .unwrap_or_default(),
        image_url: result
            .game_image
            .as_deref()
            .map(site::image_url)
            .unwrap_or_default(),
        time_labels: vec![
            (TimeCategory::Main, "Main".to_string()),
            (TimeCategory::MainExtra, "Main + Extra".to_string()),
            (TimeCategory::Completionist, "Completionist".to_string()),
        ],
        gameplay_main: hours(result.comp_main),
        gameplay_main_extra: hours(result.comp_plus),
        gameplay_completionist: hours(result.comp_100),
        name: result.game_name,
        search_term: query.to_string(),
    }
}

fn hours(seconds: u64) -> f64 {
    (seconds as f64 / 3600.0).round()
}
