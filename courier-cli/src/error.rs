//! Error types for the Courier CLI.

use courier_config::ConfigError;
use courier_webhooks::WebhookError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (reading attachments, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The client rejected or failed to deliver the message
    #[error("{0}")]
    Webhook(#[from] WebhookError),

    /// Payload could not be rendered
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The message broke one or more constraints
    #[error("The message has {0} violation(s)")]
    Invalid(usize),
}
