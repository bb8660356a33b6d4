//! Retry policy for webhook delivery

use crate::WebhookError;
use std::time::Duration;

/// Longest wait honored for a server-supplied `retry_after`
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(300);

/// Retry policy configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,

    /// Wait before each retry; the last step repeats if retries outnumber it
    pub backoff: Vec<Duration>,

    /// Added to the server's `retry_after` on a 429
    pub rate_limit_padding: Duration,

    /// Whether 4xx responses other than 429 are retried
    pub retry_client_errors: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff: vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3),
            ],
            rate_limit_padding: Duration::from_secs(1),
            retry_client_errors: true,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with no retries
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Vec::new(),
            ..Default::default()
        }
    }

    /// Create a policy with a fixed number of retries
    pub fn fixed(retries: u32, delay: Duration) -> Self {
        Self {
            max_retries: retries,
            backoff: vec![delay],
            ..Default::default()
        }
    }

    /// Create a policy with an explicit wait schedule, one retry per step
    pub fn with_schedule(backoff: Vec<Duration>) -> Self {
        Self {
            max_retries: backoff.len() as u32,
            backoff,
            ..Default::default()
        }
    }

    /// Set the padding added to rate-limit waits
    pub fn rate_limit_padding(mut self, padding: Duration) -> Self {
        self.rate_limit_padding = padding;
        self
    }

    /// Stop retrying 4xx responses other than 429
    pub fn no_client_error_retries(mut self) -> Self {
        self.retry_client_errors = false;
        self
    }

    /// Total number of attempts, the first one included
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Backoff before the given retry (1-based)
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }

        let index = (retry as usize - 1).min(self.backoff.len().saturating_sub(1));
        self.backoff.get(index).copied().unwrap_or(Duration::ZERO)
    }

    /// Check if another attempt is allowed after `attempts_made` attempts
    pub fn should_retry(&self, attempts_made: u32) -> bool {
        attempts_made <= self.max_retries
    }

    /// Wait for a 429 whose body announced `retry_after` seconds
    pub fn rate_limit_delay(&self, retry_after: f64) -> Duration {
        let wait = Duration::try_from_secs_f64(retry_after.max(0.0))
            .unwrap_or(MAX_RATE_LIMIT_WAIT)
            .min(MAX_RATE_LIMIT_WAIT);
        wait + self.rate_limit_padding
    }

    /// Classify a response status
    pub fn classify(&self, status: u16) -> StatusClass {
        match status {
            200..=299 => StatusClass::Success,
            429 => StatusClass::RateLimited,
            400..=499 if !self.retry_client_errors => StatusClass::Terminal,
            _ => StatusClass::Retryable,
        }
    }
}

/// How the pipeline treats a response status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx, including 204 No Content
    Success,
    /// 429 Too Many Requests
    RateLimited,
    /// Worth another attempt
    Retryable,
    /// Retrying cannot help
    Terminal,
}

/// Result of one delivery attempt
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    /// Attempt succeeded
    Success(T),

    /// Attempt failed but may be retried. `delay` overrides the backoff
    /// step when the server dictated a wait.
    Retry {
        error: WebhookError,
        delay: Option<Duration>,
    },

    /// Attempt failed and must not be retried
    Terminal(WebhookError),
}

impl<T> AttemptOutcome<T> {
    /// Check if the attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if the outcome asks for another attempt
    pub fn should_retry(&self) -> bool {
        matches!(self, Self::Retry { .. })
    }

    /// Get the inner value if successful
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.max_attempts(), 4);
        assert_eq!(policy.delay_for_retry(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for_retry(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for_retry(3), Duration::from_secs(3));
    }

    #[test]
    fn test_no_retries() {
        let policy = RetryPolicy::none();
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.should_retry(1));
        assert_eq!(policy.delay_for_retry(1), Duration::ZERO);
    }

    #[test]
    fn test_fixed_policy() {
        let policy = RetryPolicy::fixed(5, Duration::from_millis(10));
        assert_eq!(policy.max_attempts(), 6);

        // Last step repeats
        assert_eq!(policy.delay_for_retry(1), Duration::from_millis(10));
        assert_eq!(policy.delay_for_retry(5), Duration::from_millis(10));
    }

    #[test]
    fn test_should_retry() {
        let policy = RetryPolicy::default();

        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(policy.should_retry(3));
        assert!(!policy.should_retry(4));
    }

    #[test]
    fn test_rate_limit_delay() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.rate_limit_delay(1.0), Duration::from_secs(2));
        assert_eq!(policy.rate_limit_delay(0.5), Duration::from_millis(1500));
        assert_eq!(policy.rate_limit_delay(-3.0), Duration::from_secs(1));
        assert_eq!(policy.rate_limit_delay(f64::NAN), Duration::from_secs(1));
        assert_eq!(policy.rate_limit_delay(1e12), Duration::from_secs(301));
    }

    #[test]
    fn test_classify() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.classify(200), StatusClass::Success);
        assert_eq!(policy.classify(204), StatusClass::Success);
        assert_eq!(policy.classify(429), StatusClass::RateLimited);
        assert_eq!(policy.classify(500), StatusClass::Retryable);
        assert_eq!(policy.classify(404), StatusClass::Retryable);

        let strict = RetryPolicy::default().no_client_error_retries();
        assert_eq!(strict.classify(404), StatusClass::Terminal);
        assert_eq!(strict.classify(429), StatusClass::RateLimited);
        assert_eq!(strict.classify(503), StatusClass::Retryable);
    }

    #[test]
    fn test_attempt_outcome() {
        let success: AttemptOutcome<i32> = AttemptOutcome::Success(42);
        assert!(success.is_success());
        assert_eq!(success.ok(), Some(42));

        let retry: AttemptOutcome<i32> = AttemptOutcome::Retry {
            error: WebhookError::Config("x".to_string()),
            delay: None,
        };
        assert!(retry.should_retry());
        assert!(!retry.is_success());
    }
}
