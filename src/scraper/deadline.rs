use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::scraper::{ScrapeError, ScrapeResult};

/// Race a scrape against a hard wall-clock limit.
///
/// If the timer fires first the pending fetch is dropped, which cancels it
/// at its next suspension point and tears down its browser session, and the
/// caller receives a synthesized timeout result. Whatever the fetcher's
/// internal state, the caller is answered within roughly `limit`.
pub async fn with_deadline<F>(limit: Duration, fut: F) -> ScrapeResult
where
    F: Future<Output = ScrapeResult>,
{
    match timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ScrapeError::Timeout),
    }
}
