use std::path::PathBuf;
use std::time::Duration;

pub mod entities;
pub mod services;

pub const DEFAULT_CLASSIFIER_BASE_URL: &str = "https://api.spoonacular.com";

#[derive(Clone, Debug)]
pub struct NutreeConfig {
    pub classifier: ClassifierConfig,
    pub catalog: CatalogConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CLASSIFIER_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            retry: RetryConfig::default(),
        }
    }
}

/// Backoff policy for transient classifier failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Attempts made after the first one
    pub max_retries: u32,
    /// Delay before the first retry, doubled on each following retry
    pub initial_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(500),
        }
    }
}

impl RetryConfig {
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2_u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

#[derive(Clone, Debug, Default)]
pub struct CatalogConfig {
    /// Seed file for the diet catalog; the bundled catalog is used when unset
    pub diets_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let retry = RetryConfig {
            max_retries: 3,
            initial_backoff: Duration::from_millis(100),
        };
        assert_eq!(retry.backoff_for(1), Duration::from_millis(100));
        assert_eq!(retry.backoff_for(2), Duration::from_millis(200));
        assert_eq!(retry.backoff_for(3), Duration::from_millis(400));
    }
}
