//! Scrape orchestration: URL validation, deadline-guarded fetching and
//! the result contract returned to the HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! raw url → validate → deadline guard → browser fetch → PageSummary | ScrapeError
//! ```
//!
//! The fetcher owns one browser session per request; the orchestrator
//! guarantees the caller an answer within the overall timeout regardless
//! of what the browser is doing.

mod chrome;
mod config;
mod deadline;
mod extractor;
mod validate;

pub use chrome::ChromeFetcher;
pub use config::{FetcherConfig, DEFAULT_PLATFORM, DEFAULT_USER_AGENT};
pub use deadline::with_deadline;
pub use extractor::SummaryExtractor;
pub use validate::is_valid_url;

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::app::GlimpseError;

/// The summary fields extracted from a rendered page.
///
/// Fields default to empty strings when the document lacks the
/// corresponding element; `title` may legitimately be empty as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub title: String,
    pub meta_description: String,
    pub h1: String,
}

/// Caller-facing failure taxonomy.
///
/// Every failure inside the fetcher collapses into one of these; the
/// Display strings are the exact error messages sent over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrapeError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Timeout")]
    Timeout,

    #[error("An unknown error occurred")]
    Unknown,
}

/// Outcome of a scrape: a summary, or a classified failure.
pub type ScrapeResult = std::result::Result<PageSummary, ScrapeError>;

impl From<GlimpseError> for ScrapeError {
    fn from(err: GlimpseError) -> Self {
        match err {
            GlimpseError::NavigationTimeout => ScrapeError::Timeout,
            _ => ScrapeError::Unknown,
        }
    }
}

/// Trait for page fetching implementations.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page at `url` and extract its summary fields.
    ///
    /// `url` is expected to be validated and trimmed by the caller.
    async fn fetch(&self, url: &str) -> ScrapeResult;
}

/// Scrape a single page end to end.
///
/// Rejects syntactically invalid input before any browser work, then runs
/// the fetcher under a hard wall-clock deadline. The fetcher is never
/// invoked for input that fails validation.
pub async fn scrape_page<F>(fetcher: &F, raw_url: &str, deadline: Duration) -> ScrapeResult
where
    F: PageFetcher + ?Sized,
{
    if !is_valid_url(raw_url) {
        return Err(ScrapeError::InvalidUrl);
    }

    let url = raw_url.trim();
    with_deadline(deadline, fetcher.fetch(url)).await
}
