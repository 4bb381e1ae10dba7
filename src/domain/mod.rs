use serde::Serialize;

/// Which gameplay field a detail-page time label was mapped onto.
///
/// Serializes as the provenance strings recorded in [`GameEntry::time_labels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeCategory {
    #[serde(rename = "gameplayMain")]
    Main,
    #[serde(rename = "gameplayMainExtra")]
    MainExtra,
    #[serde(rename = "gameplayComplete")]
    Completionist,
}

impl TimeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCategory::Main => "gameplayMain",
            TimeCategory::MainExtra => "gameplayMainExtra",
            TimeCategory::Completionist => "gameplayComplete",
        }
    }
}

/// A normalized game record, produced by both search and detail lookups.
///
/// Times are fractional hours. Fields the source page or API response does
/// not carry stay at their defaults (empty strings, empty vecs, 0.0).
/// Entries are built once and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    /// Site-internal identifier, stable across calls.
    pub id: String,
    pub name: String,
    /// Free text; empty for search results (the API returns none).
    pub description: String,
    pub platforms: Vec<String>,
    pub image_url: String,
    /// Which page label fed which gameplay field, in page order.
    pub time_labels: Vec<(TimeCategory, String)>,
    pub gameplay_main: f64,
    pub gameplay_main_extra: f64,
    pub gameplay_completionist: f64,
    /// In [0, 1], rounded to two decimals. 1.0 for direct detail lookups.
    pub similarity: f64,
    /// The query that produced this entry; echoes the title for detail lookups.
    pub search_term: String,
}
