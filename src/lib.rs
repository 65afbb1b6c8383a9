//! # Glimpse
//!
//! A single-purpose page summary service: give it a URL over HTTP, it
//! drives a headless Chrome instance at the target and returns the
//! rendered page's title, meta description and first heading.
//!
//! ## Architecture
//!
//! ```text
//! GET /api/scrape → validate → deadline guard → browser fetch → JSON
//! ```
//!
//! - [`scraper`]: the core — validation, retrying browser fetcher,
//!   deadline guard and result taxonomy
//! - [`routes`]: the HTTP surface mapping outcomes to status codes
//! - [`config`]: TOML configuration with sensible defaults
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server (defaults to 127.0.0.1:3001)
//! glimpse
//!
//! # Scrape a page
//! curl 'http://127.0.0.1:3001/api/scrape?url=https://example.com'
//! ```

/// Internal error taxonomy shared by the scrape core.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/glimpse/config.toml` (created with commented
/// defaults on first run) or an explicit `--config` path.
pub mod config;

/// HTTP route handlers.
pub mod routes;

/// Scrape orchestration.
///
/// - [`ChromeFetcher`](scraper::ChromeFetcher): per-request headless
///   browser sessions with bounded-retry navigation
/// - [`scrape_page`](scraper::scrape_page): validate → deadline → fetch
/// - [`ScrapeError`](scraper::ScrapeError): the caller-facing taxonomy
pub mod scraper;

/// HTTP server assembly.
pub mod startup;
