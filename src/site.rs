//! Endpoint addresses for howlongtobeat.com.
//!
//! Every URL the crate touches is built here, so a site relocation or
//! path change is a single-point update.

use url::Url;

use crate::app::Result;

pub const BASE_URL: &str = "https://howlongtobeat.com/";
pub const REFERER_HEADER: &str = BASE_URL;
pub const SEARCH_PATH: &str = "api/search/";
pub const GAME_PATH: &str = "game/";
pub const IMAGE_PATH: &str = "games/";

/// Resolve a script `src` attribute against the site root.
///
/// Script paths on the homepage are relative (`/_next/static/...`).
pub fn script_url(src: &str) -> Result<Url> {
    Ok(Url::parse(BASE_URL)?.join(src)?)
}

/// Search endpoint with the discovered token as its final path segment.
pub fn search_url(token: &str) -> Result<Url> {
    Ok(Url::parse(BASE_URL)?.join(&format!("{SEARCH_PATH}{token}"))?)
}

/// Detail page for a site-internal game id.
pub fn game_url(id: &str) -> Result<Url> {
    Ok(Url::parse(BASE_URL)?.join(&format!("{GAME_PATH}{id}"))?)
}

/// Absolute cover-image URL from the relative name the search API returns.
pub fn image_url(image: &str) -> String {
    format!("{BASE_URL}{IMAGE_PATH}{image}")
}
