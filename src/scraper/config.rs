use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Desktop Chrome identity presented to target sites, so that sites
/// serving different content by client type behave consistently.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Platform reported alongside the user-agent override.
pub const DEFAULT_PLATFORM: &str = "Win32";

/// Configuration for the page fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// Overall wall-clock budget for a single scrape in milliseconds (default: 20000)
    pub timeout_ms: u64,

    /// Navigation attempts before a scrape is abandoned (default: 3)
    pub retry_count: u32,

    /// Wait time after page load for network activity to settle in
    /// milliseconds (default: 500)
    pub settle_ms: u64,

    /// User-agent string presented to target sites
    pub user_agent: String,

    /// Navigator platform reported alongside the user-agent
    pub platform: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            headless: true,
            timeout_ms: 20_000,
            retry_count: 3,
            settle_ms: 500,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

impl FetcherConfig {
    /// Get the overall scrape timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Budget for a single navigation attempt.
    ///
    /// The overall timeout is split evenly across attempts so the retry
    /// loop as a whole stays inside it even when every attempt runs to
    /// its limit. A `retry_count` of zero is treated as a single attempt.
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms / u64::from(self.retry_count.max(1)))
    }

    /// Get the post-load settle delay as a Duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = FetcherConfig::default();
        assert!(config.headless);
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.retry_count, 3);
        assert_eq!(config.settle_ms, 500);
        assert!(config.user_agent.contains("Chrome/91"));
        assert_eq!(config.platform, "Win32");
    }

    #[test]
    fn test_timeout_duration() {
        let config = FetcherConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_attempt_timeout_splits_overall_budget() {
        let config = FetcherConfig::default();
        assert_eq!(config.attempt_timeout(), Duration::from_millis(6_666));
    }

    #[test]
    fn test_attempt_timeout_with_zero_retries() {
        let config = FetcherConfig {
            retry_count: 0,
            ..Default::default()
        };
        assert_eq!(config.attempt_timeout(), config.timeout());
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: FetcherConfig = toml::from_str("timeout_ms = 5000").unwrap();
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.retry_count, 3);
        assert!(config.headless);
    }
}
