use std::{env, time::Duration};

/// Default store URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Upper bound on the delay between retries.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Repository tuning loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryConfig {
    /// How long a fetched member list is served from cache (default: 1s)
    pub list_cache_ttl: Duration,
    /// Timeout for a single request attempt (default: 30s)
    pub request_timeout: Duration,
    /// Retries after the first failed `list` attempt (default: 3)
    pub max_retries: u32,
    /// Delay before the first retry (default: 1s)
    pub retry_delay: Duration,
    /// Growth factor applied to the delay after each retry (default: 1.0, fixed)
    pub backoff_multiplier: f64,
}

impl RepositoryConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GYMDESK_LIST_CACHE_MS` - List cache window in ms (default: 1000)
    /// - `GYMDESK_REQUEST_TIMEOUT_MS` - Per-attempt timeout in ms (default: 30000)
    /// - `GYMDESK_MAX_RETRIES` - Retries after the first attempt (default: 3)
    /// - `GYMDESK_RETRY_DELAY_MS` - Delay before the first retry in ms (default: 1000)
    /// - `GYMDESK_BACKOFF_MULTIPLIER` - Delay growth factor (default: 1.0)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list_cache_ttl: env_millis("GYMDESK_LIST_CACHE_MS").unwrap_or(defaults.list_cache_ttl),
            request_timeout: env_millis("GYMDESK_REQUEST_TIMEOUT_MS")
                .unwrap_or(defaults.request_timeout),
            max_retries: env::var("GYMDESK_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay: env_millis("GYMDESK_RETRY_DELAY_MS").unwrap_or(defaults.retry_delay),
            backoff_multiplier: env::var("GYMDESK_BACKOFF_MULTIPLIER")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m: &f64| m.is_finite() && *m >= 1.0)
                .unwrap_or(defaults.backoff_multiplier),
        }
    }

    /// Delay to wait after failed attempt number `attempt` (1-based),
    /// capped at [`MAX_RETRY_DELAY`].
    pub fn retry_delay_for(&self, attempt: u32) -> Duration {
        if self.retry_delay.is_zero() {
            return Duration::ZERO;
        }

        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let seconds = self.retry_delay.as_secs_f64() * self.backoff_multiplier.powi(exponent);
        Duration::try_from_secs_f64(seconds)
            .unwrap_or(MAX_RETRY_DELAY)
            .min(MAX_RETRY_DELAY)
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            list_cache_ttl: Duration::from_millis(1_000),
            request_timeout: Duration::from_millis(30_000),
            max_retries: 3,
            retry_delay: Duration::from_millis(1_000),
            backoff_multiplier: 1.0,
        }
    }
}

fn env_millis(key: &str) -> Option<Duration> {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = RepositoryConfig::default();

        assert_eq!(config.list_cache_ttl, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay, Duration::from_secs(1));
        assert_eq!(config.backoff_multiplier, 1.0);
    }

    #[test]
    fn test_fixed_delay() {
        let config = RepositoryConfig::default();
        assert_eq!(config.retry_delay_for(1), Duration::from_secs(1));
        assert_eq!(config.retry_delay_for(3), Duration::from_secs(1));
    }

    #[test]
    fn test_exponential_delay() {
        let config = RepositoryConfig {
            retry_delay: Duration::from_millis(200),
            backoff_multiplier: 2.0,
            ..RepositoryConfig::default()
        };
        assert_eq!(config.retry_delay_for(1), Duration::from_millis(200));
        assert_eq!(config.retry_delay_for(2), Duration::from_millis(400));
        assert_eq!(config.retry_delay_for(3), Duration::from_millis(800));
    }

    #[test]
    fn test_delay_is_capped_instead_of_overflowing() {
        let config = RepositoryConfig {
            backoff_multiplier: 1e12,
            ..RepositoryConfig::default()
        };
        assert_eq!(config.retry_delay_for(1), Duration::from_secs(1));
        assert_eq!(config.retry_delay_for(3), MAX_RETRY_DELAY);
        assert_eq!(config.retry_delay_for(u32::MAX), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_long_base_delay_is_capped() {
        let config = RepositoryConfig {
            retry_delay: Duration::from_secs(3_600),
            ..RepositoryConfig::default()
        };
        assert_eq!(config.retry_delay_for(1), MAX_RETRY_DELAY);
    }

    #[test]
    fn test_zero_delay_stays_zero() {
        let config = RepositoryConfig {
            retry_delay: Duration::ZERO,
            backoff_multiplier: 1e300,
            ..RepositoryConfig::default()
        };
        assert_eq!(config.retry_delay_for(5), Duration::ZERO);
    }

    #[test]
    fn test_from_env_overrides() {
        env::set_var("GYMDESK_MAX_RETRIES", "5");
        env::set_var("GYMDESK_REQUEST_TIMEOUT_MS", "2500");
        env::set_var("GYMDESK_BACKOFF_MULTIPLIER", "0.5");

        let config = RepositoryConfig::from_env();

        env::remove_var("GYMDESK_MAX_RETRIES");
        env::remove_var("GYMDESK_REQUEST_TIMEOUT_MS");
        env::remove_var("GYMDESK_BACKOFF_MULTIPLIER");

        assert_eq!(config.max_retries, 5);
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        // Shrinking delays are ignored.
        assert_eq!(config.backoff_multiplier, 1.0);
        assert_eq!(config.list_cache_ttl, Duration::from_secs(1));
    }
}
