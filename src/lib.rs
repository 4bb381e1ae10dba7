//! # hltb
//!
//! A client for howlongtobeat.com, which exposes no stable public API.
//!
//! ## Architecture
//!
//! ```text
//! Service → SearchClient → TokenDiscovery → Fetcher
//!         → DetailClient → Fetcher → detail parser → duration parser
//! ```
//!
//! The hard parts live in two places: [`token`], which discovers the
//! rotating API token by scanning the site's script bundles, and
//! [`detail`], which parses change-prone, hash-suffixed HTML into a
//! normalized [`GameEntry`](domain::GameEntry).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hltb::service::HowLongToBeatService;
//!
//! let service = HowLongToBeatService::new();
//! let results = service.search("dark souls").await?;
//! let game = service.detail(&results[0].id).await?;
//! ```

/// Error type and crate-wide `Result` alias.
pub mod app;

/// Command-line interface using clap.
///
/// - `search <query...>` - Search games by title
/// - `detail <id>` - Show one game's times
pub mod cli;

/// Core domain model: [`GameEntry`](domain::GameEntry) and
/// [`TimeCategory`](domain::TimeCategory).
pub mod domain;

/// Detail-page fetching and best-effort HTML parsing.
pub mod detail;

/// Free-text duration parsing ("5½ Hours", "50 Mins", ranges).
pub mod duration;

/// HTTP transport seam.
///
/// - [`Fetcher`](fetcher::Fetcher): async trait for page/script/API access
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Search request payload, response schema, and result mapping.
pub mod search;

/// The public facade, [`HowLongToBeatService`](service::HowLongToBeatService).
pub mod service;

/// Normalized edit-distance similarity scoring.
pub mod similarity;

/// Site endpoints and URL builders.
pub mod site;

/// Rotating API-token discovery from script bundles.
pub mod token;
