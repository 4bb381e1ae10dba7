//! Detail-page fetching and parsing.
//!
//! All the dirty DOM traversal lives here. The site ships CSS-module class
//! names with hashed suffixes (`GameHeader_profile_header__q5earl`), so every
//! selector matches on a class-name *substring*, never an exact class. The
//! substrings are collected in [`Selectors`] so a markup change on the site
//! is a single-point update.
//!
//! Parsing is best-effort throughout: no section is mandatory, and a page
//! with no recognizable content yields a default-valued entry rather than
//! an error.

use std::sync::{Arc, LazyLock};

use scraper::{ElementRef, Html, Selector};

use crate::app::{HltbError, Result};
use crate::domain::{GameEntry, TimeCategory};
use crate::duration;
use crate::fetcher::Fetcher;
use crate::site;

/// Compiled selectors for the detail-page sections.
struct Selectors {
    title: Selector,
    image: Selector,
    description: Selector,
    profile_info: Selector,
    time_items: Selector,
    item_label: Selector,
    item_value: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    title: parse_selector(r#"div[class*="GameHeader_profile_header"]"#),
    image: parse_selector(r#"div[class*="GameHeader_game_image"] img"#),
    description: parse_selector(r#".in.back_primary.shadow_box div[class*="GameSummary_large"]"#),
    profile_info: parse_selector(r#"div[class*="GameSummary_profile_info"]"#),
    time_items: parse_selector(r#"div[class*="GameStats_game_times"] li"#),
    item_label: parse_selector("h4"),
    item_value: parse_selector("h5"),
});

fn parse_selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid detail-page selector")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Parse a detail page into a [`GameEntry`].
///
/// Detail lookups are self-matching: `similarity` is fixed at 1.0 and the
/// search term echoes the extracted title.
pub fn parse_details(html: &str, id: &str) -> GameEntry {
    let document = Html::parse_document(html);
    let selectors = &*SELECTORS;

    let name = document
        .select(&selectors.title)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .unwrap_or_default();

    let image_url = document
        .select(&selectors.image)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default()
        .to_string();

    let description = document
        .select(&selectors.description)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let platforms = document
        .select(&selectors.profile_info)
        .map(element_text)
        .find(|meta| meta.contains("Platforms:"))
        .map(|meta| split_platforms(&meta))
        .unwrap_or_default();

    let mut time_labels = Vec::new();
    let mut gameplay_main = 0.0;
    let mut gameplay_main_extra = 0.0;
    let mut gameplay_completionist = 0.0;

    for item in document.select(&selectors.time_items) {
        let label = item
            .select(&selectors.item_label)
            .next()
            .map(element_text)
            .unwrap_or_default();
        let time = item
            .select(&selectors.item_value)
            .next()
            .map(|el| duration::parse_time(&element_text(el)))
            .unwrap_or(0.0);

        match classify_label(&label) {
            Some(TimeCategory::Main) => {
                gameplay_main = time;
                time_labels.push((TimeCategory::Main, label));
            }
            Some(TimeCategory::MainExtra) => {
                gameplay_main_extra = time;
                time_labels.push((TimeCategory::MainExtra, label));
            }
            Some(TimeCategory::Completionist) => {
                gameplay_completionist = time;
                time_labels.push((TimeCategory::Completionist, label));
            }
            None => {}
        }
    }

    GameEntry {
        id: id.to_string(),
        search_term: name.clone(),
        name,
        description,
        platforms,
        image_url,
        time_labels,
        gameplay_main,
        gameplay_main_extra,
        gameplay_completionist,
        similarity: 1.0,
    }
}

/// Map a time-item heading onto its gameplay field by label prefix.
/// Unrecognized headings are skipped entirely.
fn classify_label(label: &str) -> Option<TimeCategory> {
    if label.starts_with("Main Story")
        || label.starts_with("Single-Player")
        || label.starts_with("Solo")
    {
        Some(TimeCategory::Main)
    } else if label.starts_with("Main + Sides") || label.starts_with("Co-Op") {
        Some(TimeCategory::MainExtra)
    } else if label.starts_with("Completionist") || label.starts_with("Vs.") {
        Some(TimeCategory::Completionist)
    } else {
        None
    }
}

/// `"Platforms:\nPS3, PC"` -> `["PS3", "PC"]`. Only the first label
/// occurrence is stripped.
fn split_platforms(meta: &str) -> Vec<String> {
    meta.replace('\n', "")
        .replacen("Platforms:", "", 1)
        .split(',')
        .map(|platform| platform.trim().to_string())
        .collect()
}

/// Fetches a detail page by id and delegates to [`parse_details`].
pub struct DetailClient {
    fetcher: Arc<dyn Fetcher>,
}

impl DetailClient {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn detail(&self, id: &str) -> Result<GameEntry> {
        let url = site::game_url(id)?;
        tracing::debug!("fetching detail page {}", url);
        let html = self
            .fetcher
            .get(url.as_str())
            .await
            .map_err(|e| HltbError::DetailFetch(e.to_string()))?;

        Ok(parse_details(&html, id))
    }
}
