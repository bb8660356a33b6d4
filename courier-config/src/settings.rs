// Webhook settings

use crate::{ConfigValidator, Result, Validate};
use serde::{Deserialize, Deserializer, Serialize};

/// Default per-attempt request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a webhook client, as loaded from the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    /// Destination webhook URL (required)
    pub webhook_url: Option<String>,

    /// Per-attempt request timeout in seconds
    #[serde(deserialize_with = "flexible_u64")]
    pub timeout_secs: u64,

    /// User-Agent header override
    pub user_agent: Option<String>,

    /// Default username override applied to messages that set none
    pub username: Option<String>,

    /// Default avatar URL override applied to messages that set none
    pub avatar_url: Option<String>,

    /// Resend failed messages as file attachments
    #[serde(deserialize_with = "flexible_bool")]
    pub attach_on_error: bool,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            username: None,
            avatar_url: None,
            attach_on_error: false,
        }
    }
}

impl WebhookSettings {
    /// Settings with only a destination URL
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: Some(webhook_url.into()),
            ..Default::default()
        }
    }

    /// The destination URL, trimmed. `None` when absent or blank.
    pub fn url(&self) -> Option<&str> {
        self.webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl Validate for WebhookSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(self.webhook_url.as_deref(), "webhook_url")?;
        if let Some(url) = self.url() {
            ConfigValidator::is_url(url, "webhook_url")?;
        }
        ConfigValidator::in_range(self.timeout_secs, 1, 3600, "timeout_secs")?;
        Ok(())
    }
}

// Environment values arrive as strings; files may carry native types.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flexible<T> {
    Native(T),
    Text(String),
}

fn flexible_u64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u64, D::Error> {
    match Flexible::<u64>::deserialize(deserializer)? {
        Flexible::Native(v) => Ok(v),
        Flexible::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    match Flexible::<bool>::deserialize(deserializer)? {
        Flexible::Native(v) => Ok(v),
        Flexible::Text(s) => match s.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "invalid boolean value: {}",
                other
            ))),
        },
    }
}
