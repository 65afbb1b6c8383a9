use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::network::SetUserAgentOverrideParams;
use chromiumoxide::error::CdpError;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::warn;

use crate::app::{GlimpseError, Result};
use crate::scraper::{
    FetcherConfig, PageFetcher, PageSummary, ScrapeError, ScrapeResult, SummaryExtractor,
};

/// Chrome-based page fetcher using chromiumoxide.
///
/// Every [`fetch`](PageFetcher::fetch) call launches a fresh browser that
/// is exclusively owned by that request and torn down on every exit path.
pub struct ChromeFetcher {
    config: FetcherConfig,
}

impl ChromeFetcher {
    /// Create a new fetcher with the given configuration
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    async fn fetch_page(&self, url: &str) -> Result<PageSummary> {
        let session = BrowserSession::launch(&self.config).await?;
        let outcome = self.drive(&session, url).await;
        session.close().await;
        outcome
    }

    /// Navigate with bounded retries, then run the extraction script.
    async fn drive(&self, session: &BrowserSession, url: &str) -> Result<PageSummary> {
        let page = session
            .browser
            .new_page("about:blank")
            .await
            .map_err(map_cdp)?;

        let identity = SetUserAgentOverrideParams::builder()
            .user_agent(&self.config.user_agent)
            .platform(&self.config.platform)
            .build()
            .map_err(GlimpseError::Browser)?;
        page.set_user_agent(identity).await.map_err(map_cdp)?;

        let attempts = self.config.retry_count.max(1);
        let budget = self.config.attempt_timeout();
        let mut navigated = false;

        for attempt in 1..=attempts {
            let result = match timeout(budget, self.navigate(&page, url)).await {
                Ok(result) => result,
                Err(_) => Err(GlimpseError::NavigationTimeout),
            };

            match result {
                Ok(()) => {
                    navigated = true;
                    break;
                }
                Err(err) if attempt == attempts => return Err(err),
                Err(err) => {
                    warn!(
                        "Navigation attempt {}/{} for {} failed: {}, retrying...",
                        attempt, attempts, url, err
                    );
                }
            }
        }

        // Should be unreachable given the loop propagates the last failure.
        if !navigated {
            return Err(GlimpseError::NoResponse);
        }

        let value: serde_json::Value = page
            .evaluate(SummaryExtractor::extraction_script())
            .await
            .map_err(map_cdp)?
            .into_value()
            .map_err(|e| GlimpseError::Extraction(format!("Failed to parse result: {}", e)))?;

        Ok(SummaryExtractor::summary_from_value(&value))
    }

    /// A single navigation attempt: load the URL, wait for the navigation
    /// response, check its status, and let network activity settle.
    async fn navigate(&self, page: &Page, url: &str) -> Result<()> {
        page.goto(url).await.map_err(map_cdp)?;

        let request = page
            .wait_for_navigation_response()
            .await
            .map_err(map_cdp)?
            .ok_or(GlimpseError::NoResponse)?;

        if let Some(failure) = &request.failure_text {
            return Err(GlimpseError::Browser(failure.clone()));
        }

        let response = request.response.as_ref().ok_or(GlimpseError::NoResponse)?;
        if !(200..300).contains(&response.status) {
            return Err(GlimpseError::HttpStatus(response.status));
        }

        // Let in-flight subresource requests finish before extraction runs.
        tokio::time::sleep(self.config.settle()).await;

        Ok(())
    }
}

#[async_trait]
impl PageFetcher for ChromeFetcher {
    async fn fetch(&self, url: &str) -> ScrapeResult {
        match self.fetch_page(url).await {
            Ok(summary) => Ok(summary),
            Err(err) => {
                warn!("Scrape of {} failed: {}", url, err);
                Err(ScrapeError::from(err))
            }
        }
    }
}

/// One spawned browser process plus the task draining its CDP event
/// stream, exclusively owned by a single in-flight request.
///
/// Dropping the session mid-flight (the outer deadline cancelling the
/// fetch future) kills the spawned browser process; the event task exits
/// on its own once the connection closes.
struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(config: &FetcherConfig) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-software-rasterizer")
            .request_timeout(config.attempt_timeout());

        if !config.headless {
            builder = builder.with_head();
        }

        let browser_config = builder
            .build()
            .map_err(|e| GlimpseError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
            GlimpseError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {
                // Drain CDP events until the connection closes
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Close the browser and reap its process. Consuming `self` means a
    /// request can never close its session twice.
    async fn close(mut self) {
        match self.browser.close().await {
            Ok(_) => {
                let _ = self.browser.wait().await;
            }
            Err(e) => warn!("Browser did not close cleanly: {}", e),
        }
        self.handler_task.abort();
    }
}

/// Collapse chromiumoxide errors into the crate taxonomy, preserving the
/// timeout distinction the classifier depends on.
fn map_cdp(err: CdpError) -> GlimpseError {
    match err {
        CdpError::Timeout => GlimpseError::NavigationTimeout,
        other => GlimpseError::Browser(other.to_string()),
    }
}
