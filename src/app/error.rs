use thiserror::Error;

/// Internal failure taxonomy for the scrape core.
///
/// These carry the diagnostic detail that gets logged; at the fetcher
/// boundary they collapse into the caller-facing
/// [`ScrapeError`](crate::scraper::ScrapeError).
#[derive(Error, Debug)]
pub enum GlimpseError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation yielded no response")]
    NoResponse,

    #[error("Navigation failed with HTTP status {0}")]
    HttpStatus(i64),

    #[error("Navigation timed out")]
    NavigationTimeout,

    #[error("Extraction error: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, GlimpseError>;
