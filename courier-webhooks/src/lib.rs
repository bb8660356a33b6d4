//! Webhook message delivery for Courier
//!
//! This crate composes validated messages for chat webhooks (a Discord
//! channel webhook, for example) and delivers them with bounded retries.
//!
//! # Features
//!
//! - **Validated messages**: messages, embeds and files check their limits
//!   when built and keep every violation, not just the first
//! - **JSON or multipart bodies**: attachments switch the request to
//!   `multipart/form-data` automatically
//! - **Retries**: a fixed 1s/2s/3s schedule, at most four attempts
//! - **Rate limits**: HTTP 429 answers wait the server's `retry_after`
//! - **Fallback**: optionally resend a failed message and its error report
//!   as attachments
//!
//! # Example: Sending a message
//!
//! ```rust,no_run
//! use courier_webhooks::{Embed, EmbedColor, EmbedField, Message, WebhookClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WebhookClient::from_url("https://discord.com/api/webhooks/123/token")?;
//!
//!     let message = Message::builder()
//!         .content("Deployment finished")
//!         .embed(
//!             Embed::builder()
//!                 .title("api-server")
//!                 .color(EmbedColor::Green)
//!                 .field(EmbedField::new("Version", "1.4.2").inline())
//!                 .build(),
//!         )
//!         .build();
//!
//!     client.send(&message).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Example: Checking a message without sending it
//!
//! ```rust
//! use courier_validation::Notifiable;
//! use courier_webhooks::Message;
//!
//! let message = Message::new("a".repeat(2001));
//! assert!(message.is_invalid());
//! assert!(message.violation_messages()[0].contains("2000 characters"));
//! ```

mod client;
mod color;
mod config;
mod delivery;
mod diagnostics;
mod embed;
mod error;
mod fallback;
mod file;
mod message;
mod payload;
mod rate_limit;
mod retry;
mod transport;

pub use client::{SendOptions, WebhookClient, validate_send};
pub use color::EmbedColor;
pub use config::{DEFAULT_TIMEOUT, WebhookConfig, WebhookConfigBuilder};
pub use delivery::{SendOutcome, WebhookDelivery, WebhookDeliveryStatus};
pub use diagnostics::{ErrorReport, root_cause, source_chain};
pub use embed::{
    Embed, EmbedAuthor, EmbedBuilder, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail,
    MAX_DESCRIPTION_LENGTH, MAX_FIELDS, MAX_TITLE_LENGTH,
};
pub use error::{TransportError, TransportErrorKind, WebhookError};
pub use fallback::{ERROR_REPORT_FILE, FALLBACK_CONTENT, FallbackPackage, ORIGINAL_MESSAGE_FILE};
pub use file::{MAX_FILES, WebhookFile, check_file_count};
pub use message::{MAX_CONTENT_LENGTH, MAX_EMBEDS, Message, MessageBuilder};
pub use payload::{FilePart, WebhookBody};
pub use rate_limit::RateLimitResponse;
pub use retry::{AttemptOutcome, RetryPolicy, StatusClass};
pub use transport::{ReqwestTransport, Transport, TransportResponse};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
