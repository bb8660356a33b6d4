//! Delivery records

use crate::WebhookError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest response body kept on a delivery record
const MAX_RESPONSE_BODY: usize = 1024;

/// Status of a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookDeliveryStatus {
    /// Not attempted yet
    Pending,

    /// At least one attempt failed and another is scheduled
    Retrying,

    /// Delivery succeeded
    Succeeded,
}

impl WebhookDeliveryStatus {
    /// Check if the delivery succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Record of one logical send and its attempts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookDelivery {
    /// Unique delivery ID
    pub id: String,

    /// Current status
    pub status: WebhookDeliveryStatus,

    /// Number of attempts made
    pub attempts: u32,

    /// Number of files sent with the message
    pub file_count: usize,

    /// HTTP status code from the last attempt
    pub last_status_code: Option<u16>,

    /// Error from the last failed attempt
    pub last_error: Option<String>,

    /// Response body from the last attempt (truncated)
    pub last_response_body: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WebhookDelivery {
    /// Create a new delivery record
    pub fn new(file_count: usize) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            status: WebhookDeliveryStatus::Pending,
            attempts: 0,
            file_count,
            last_status_code: None,
            last_error: None,
            last_response_body: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the start of an attempt
    pub(crate) fn start_attempt(&mut self) {
        self.attempts += 1;
        self.updated_at = Utc::now();
    }

    /// Record a successful attempt
    pub(crate) fn mark_succeeded(&mut self, status_code: u16, response_body: &str) {
        self.status = WebhookDeliveryStatus::Succeeded;
        self.last_status_code = Some(status_code);
        self.last_response_body = non_empty(response_body);
        self.last_error = None;
        self.updated_at = Utc::now();
    }

    /// Record a failed attempt that will be retried
    pub(crate) fn mark_retrying(&mut self, error: &WebhookError) {
        self.status = WebhookDeliveryStatus::Retrying;
        self.last_status_code = error.status_code();
        self.last_response_body = error.response_body().and_then(non_empty);
        self.last_error = Some(error.to_string());
        self.updated_at = Utc::now();
    }
}

fn non_empty(body: &str) -> Option<String> {
    if body.is_empty() {
        None
    } else {
        Some(truncate(body, MAX_RESPONSE_BODY))
    }
}

/// Truncate to at most `max_chars` characters, marking the cut with `...`
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Final result of a send that did not raise an error
#[derive(Debug)]
pub enum SendOutcome {
    /// The message itself was delivered
    Delivered(WebhookDelivery),

    /// The message failed; the diagnostic resend carrying it as
    /// attachments was delivered instead
    FallbackDelivered {
        error: WebhookError,
        delivery: WebhookDelivery,
    },
}

impl SendOutcome {
    /// True only when the original message was delivered
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }

    /// Record of whichever send reached the endpoint
    pub fn delivery(&self) -> &WebhookDelivery {
        match self {
            Self::Delivered(delivery) | Self::FallbackDelivered { delivery, .. } => delivery,
        }
    }

    /// The original failure, if the fallback was used
    pub fn error(&self) -> Option<&WebhookError> {
        match self {
            Self::Delivered(_) => None,
            Self::FallbackDelivered { error, .. } => Some(error),
        }
    }

    /// Convert into a `Result`, treating a fallback delivery as the original error
    pub fn into_result(self) -> Result<WebhookDelivery, WebhookError> {
        match self {
            Self::Delivered(delivery) => Ok(delivery),
            Self::FallbackDelivered { error, .. } => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_lifecycle() {
        let mut delivery = WebhookDelivery::new(2);

        assert_eq!(delivery.status, WebhookDeliveryStatus::Pending);
        assert_eq!(delivery.attempts, 0);

        delivery.start_attempt();
        delivery.mark_retrying(&WebhookError::Delivery {
            status: 502,
            body: "bad gateway".to_string(),
            attempts: 1,
        });
        assert_eq!(delivery.status, WebhookDeliveryStatus::Retrying);
        assert_eq!(delivery.last_status_code, Some(502));
        assert!(delivery.last_error.is_some());

        delivery.start_attempt();
        delivery.mark_succeeded(204, "");
        assert!(delivery.status.is_success());
        assert_eq!(delivery.attempts, 2);
        assert_eq!(delivery.last_status_code, Some(204));
        assert_eq!(delivery.last_response_body, None);
        assert_eq!(delivery.last_error, None);
    }

    #[test]
    fn test_response_body_is_truncated() {
        let mut delivery = WebhookDelivery::new(0);
        delivery.mark_succeeded(200, &"é".repeat(2000));

        let body = delivery.last_response_body.unwrap();
        assert_eq!(body.chars().count(), 1024);
        assert!(body.ends_with("..."));
    }

    #[test]
    fn test_fallback_outcome_is_not_success() {
        let outcome = SendOutcome::FallbackDelivered {
            error: WebhookError::Config("x".to_string()),
            delivery: WebhookDelivery::new(2),
        };

        assert!(!outcome.is_success());
        assert!(outcome.error().is_some());
        assert_eq!(outcome.delivery().file_count, 2);
        assert!(outcome.into_result().is_err());
    }
}
