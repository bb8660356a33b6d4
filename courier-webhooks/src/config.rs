//! Configuration for webhook client

use crate::{Result, RetryPolicy, WebhookError};
use courier_config::WebhookSettings;
use std::time::Duration;
use url::Url;

/// Default per-attempt timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the webhook client
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Destination webhook URL
    pub url: Url,

    /// Timeout for each attempt
    pub timeout: Duration,

    /// User-Agent header for outgoing requests
    pub user_agent: String,

    /// Retry policy
    pub retry_policy: RetryPolicy,

    /// Username applied to messages that do not set one
    pub username: Option<String>,

    /// Avatar applied to messages that do not set one
    pub avatar_url: Option<String>,

    /// Resend failures as attachments by default
    pub attach_on_error: bool,
}

impl WebhookConfig {
    /// Create a configuration with defaults for the given URL
    pub fn new(url: &str) -> Result<Self> {
        Self::builder(url).build()
    }

    /// Create a builder for custom configuration
    pub fn builder(url: impl Into<String>) -> WebhookConfigBuilder {
        WebhookConfigBuilder::new(url)
    }

    /// Build from loaded settings
    pub fn from_settings(settings: &WebhookSettings) -> Result<Self> {
        let url = settings
            .url()
            .ok_or_else(|| WebhookError::Config("The webhook URL cannot be empty".to_string()))?;

        let mut builder = Self::builder(url)
            .timeout_secs(settings.timeout_secs)
            .attach_on_error(settings.attach_on_error);
        if let Some(user_agent) = settings.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }
        if let Some(username) = settings.username.as_deref() {
            builder = builder.username(username);
        }
        if let Some(avatar_url) = settings.avatar_url.as_deref() {
            builder = builder.avatar_url(avatar_url);
        }

        builder.build()
    }
}

/// Builder for WebhookConfig
#[derive(Debug, Clone)]
pub struct WebhookConfigBuilder {
    url: String,
    timeout: Duration,
    user_agent: String,
    retry_policy: RetryPolicy,
    username: Option<String>,
    avatar_url: Option<String>,
    attach_on_error: bool,
}

impl WebhookConfigBuilder {
    /// Create a new builder with default settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("Courier-Webhooks/{}", env!("CARGO_PKG_VERSION")),
            retry_policy: RetryPolicy::default(),
            username: None,
            avatar_url: None,
            attach_on_error: false,
        }
    }

    /// Set the per-attempt timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the retry policy
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Disable retries
    pub fn no_retries(mut self) -> Self {
        self.retry_policy = RetryPolicy::none();
        self
    }

    /// Default username for messages without one
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Default avatar for messages without one
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Resend failures as attachments on `send`
    pub fn attach_on_error(mut self, enabled: bool) -> Self {
        self.attach_on_error = enabled;
        self
    }

    /// Build the configuration, checking the URL
    pub fn build(self) -> Result<WebhookConfig> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(WebhookError::Config(
                "The webhook URL cannot be empty".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(WebhookError::Config(
                "The request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(WebhookConfig {
            url: Url::parse(url)?,
            timeout: self.timeout,
            user_agent: self.user_agent,
            retry_policy: self.retry_policy,
            username: self.username,
            avatar_url: self.avatar_url,
            attach_on_error: self.attach_on_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WebhookConfig::new("https://hooks.test/api/webhooks/1/token").unwrap();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry_policy, RetryPolicy::default());
        assert!(!config.attach_on_error);
        assert!(config.user_agent.starts_with("Courier-Webhooks/"));
    }

    #[test]
    fn test_builder() {
        let config = WebhookConfig::builder("https://hooks.test/1")
            .timeout_secs(60)
            .no_retries()
            .username("bot")
            .attach_on_error(true)
            .build()
            .unwrap();

        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.retry_policy.max_retries, 0);
        assert_eq!(config.username.as_deref(), Some("bot"));
        assert!(config.attach_on_error);
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let err = WebhookConfig::new("  ").unwrap_err();
        assert!(matches!(err, WebhookError::Config(_)));
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        let err = WebhookConfig::new("not a url").unwrap_err();
        assert!(matches!(err, WebhookError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_settings() {
        let mut settings = WebhookSettings::new("https://hooks.test/2");
        settings.timeout_secs = 5;
        settings.username = Some("Courier".to_string());

        let config = WebhookConfig::from_settings(&settings).unwrap();
        assert_eq!(config.url.as_str(), "https://hooks.test/2");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.username.as_deref(), Some("Courier"));
    }

    #[test]
    fn test_from_settings_without_url() {
        let settings = WebhookSettings::default();
        assert!(WebhookConfig::from_settings(&settings).is_err());
    }
}
