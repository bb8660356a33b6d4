// Courier - validated messages for chat webhooks
//
// This library composes messages with embeds and attachments, checks them
// against the endpoint's limits, and delivers them with bounded retries.

// Re-export member crates
#[cfg(feature = "validation")]
pub use courier_validation;

#[cfg(feature = "config")]
pub use courier_config;

#[cfg(feature = "webhooks")]
pub use courier_webhooks;

// Prelude for common imports
#[cfg(feature = "webhooks")]
pub mod prelude {
    pub use courier_validation::{Notifiable, Violation, Violations};

    pub use courier_config::{SettingsLoader, WebhookSettings};

    pub use courier_webhooks::{
        Embed, EmbedAuthor, EmbedColor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail,
        Message, RetryPolicy, SendOptions, SendOutcome, WebhookClient, WebhookConfig,
        WebhookError, WebhookFile,
    };
}
