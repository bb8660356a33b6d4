//! Error types for webhook operations

use courier_validation::Violations;
use thiserror::Error;

/// Errors surfaced by the webhook client.
///
/// Every failure a caller can see is one of these variants; the accessor
/// methods expose the structured context (violations, status code, raw
/// response body) without matching on the variant.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The message or its files broke one or more constraints. Never sent.
    #[error("The message cannot be sent: {}", .violations.joined(", "))]
    Validation { violations: Violations },

    /// The endpoint answered with a non-success status
    #[error("An error occurred in sending the message: {body} - HTTP status code {status} (after {attempts} attempts)")]
    Delivery {
        status: u16,
        body: String,
        attempts: u32,
    },

    /// Still rate limited when the attempt budget ran out
    #[error("Rate limit exceeded after {attempts} attempts (retry after {retry_after:?}s)")]
    RateLimitExceeded {
        retry_after: Option<f64>,
        body: String,
        attempts: u32,
    },

    /// Network or timeout fault
    #[error("An error occurred in sending the message after {attempts} attempts: {source}")]
    Transport {
        #[source]
        source: TransportError,
        attempts: u32,
    },

    /// The diagnostic resend failed as well
    #[error("An error occurred in sending the error attachments: {cause} (original error: {original})")]
    Fallback {
        original: Box<WebhookError>,
        #[source]
        cause: Box<WebhookError>,
    },

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Payload serialization failed
    #[error("Payload error: {0}")]
    Payload(String),
}

impl WebhookError {
    /// Short name of the error kind, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::Delivery { .. } => "DeliveryError",
            Self::RateLimitExceeded { .. } => "RateLimitExceeded",
            Self::Transport { .. } => "TransportError",
            Self::Fallback { .. } => "FallbackFailure",
            Self::InvalidUrl(_) | Self::Config(_) => "ConfigError",
            Self::Payload(_) => "PayloadError",
        }
    }

    /// Check if this is a local validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Accumulated violations, for validation failures
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Validation { violations } => Some(violations),
            _ => None,
        }
    }

    /// HTTP status code of the last response, if one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Delivery { status, .. } => Some(*status),
            Self::RateLimitExceeded { .. } => Some(429),
            Self::Fallback { original, .. } => original.status_code(),
            _ => None,
        }
    }

    /// Raw body of the last response, if one was received
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Delivery { body, .. } | Self::RateLimitExceeded { body, .. } => Some(body),
            Self::Fallback { original, .. } => original.response_body(),
            _ => None,
        }
    }

    /// Number of network attempts made before giving up
    pub fn attempts(&self) -> Option<u32> {
        match self {
            Self::Delivery { attempts, .. }
            | Self::RateLimitExceeded { attempts, .. }
            | Self::Transport { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }

    /// Structured key/value context, in a stable order
    pub fn context(&self) -> Vec<(String, String)> {
        let mut context = Vec::new();

        if let Some(status) = self.status_code() {
            context.push(("status_code".to_string(), status.to_string()));
        }
        if let Some(body) = self.response_body() {
            context.push(("response_body".to_string(), body.to_string()));
        }
        if let Some(attempts) = self.attempts() {
            context.push(("attempts".to_string(), attempts.to_string()));
        }
        if let Self::RateLimitExceeded {
            retry_after: Some(retry_after),
            ..
        } = self
        {
            context.push(("retry_after".to_string(), retry_after.to_string()));
        }
        if let Some(violations) = self.violations() {
            for (index, violation) in violations.iter().enumerate() {
                context.push((format!("violation[{}]", index + 1), violation.message.clone()));
            }
        }

        context
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::Payload(err.to_string())
    }
}

/// Category of a transport-level fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The attempt exceeded its timeout
    Timeout,
    /// DNS or TCP/TLS connection failure
    Connect,
    /// The request could not be built; retrying cannot help
    Request,
    /// Reading the response body failed
    Body,
    /// Anything else raised while sending
    Other,
}

/// Transport-level fault raised by a [`crate::Transport`]
#[derive(Error, Debug, Clone)]
#[error("{kind:?} error: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    /// Create a new transport error
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Check if another attempt may succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self.kind, TransportErrorKind::Request)
    }

    /// Check if this is a timeout error
    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportErrorKind::Timeout
        } else if err.is_connect() {
            TransportErrorKind::Connect
        } else if err.is_builder() {
            TransportErrorKind::Request
        } else if err.is_body() || err.is_decode() {
            TransportErrorKind::Body
        } else {
            TransportErrorKind::Other
        };

        Self::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_violation() {
        let mut violations = Violations::new();
        violations.push("first");
        violations.push("second");

        let err = WebhookError::Validation { violations };
        assert_eq!(err.to_string(), "The message cannot be sent: first, second");
        assert!(err.is_validation());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_delivery_context() {
        let err = WebhookError::Delivery {
            status: 500,
            body: "boom".to_string(),
            attempts: 4,
        };

        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.response_body(), Some("boom"));
        assert_eq!(err.attempts(), Some(4));
        assert_eq!(err.kind_name(), "DeliveryError");
        assert_eq!(
            err.context(),
            vec![
                ("status_code".to_string(), "500".to_string()),
                ("response_body".to_string(), "boom".to_string()),
                ("attempts".to_string(), "4".to_string()),
            ]
        );
    }

    #[test]
    fn test_fallback_exposes_original_status() {
        let err = WebhookError::Fallback {
            original: Box::new(WebhookError::Delivery {
                status: 502,
                body: String::new(),
                attempts: 4,
            }),
            cause: Box::new(WebhookError::Transport {
                source: TransportError::new(TransportErrorKind::Connect, "refused"),
                attempts: 4,
            }),
        };

        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.kind_name(), "FallbackFailure");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_transport_retryability() {
        assert!(TransportError::new(TransportErrorKind::Timeout, "t").is_retryable());
        assert!(TransportError::new(TransportErrorKind::Connect, "c").is_retryable());
        assert!(!TransportError::new(TransportErrorKind::Request, "r").is_retryable());
    }
}
