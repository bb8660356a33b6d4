//! `courier send` - deliver a message to the configured webhook.

use super::{build_message, read_files};
use crate::error::CliResult;
use crate::{SendArgs, info, success, warn};
use courier_config::SettingsLoader;
use courier_webhooks::{SendOutcome, WebhookClient};
use tracing::debug;

pub async fn run(args: &SendArgs) -> CliResult<()> {
    let mut loader = SettingsLoader::new();
    if let Some(path) = &args.config {
        loader = loader.file(path.clone());
    }
    loader = loader.dotenv(None).env();
    if let Some(url) = &args.webhook_url {
        loader = loader.set("webhook_url", url.as_str());
    }
    if args.attach_on_error {
        loader = loader.set("attach_on_error", true);
    }

    let settings = loader.load()?;
    debug!(timeout_secs = settings.timeout_secs, "Settings loaded");

    let client = WebhookClient::from_settings(&settings)?;
    let message = build_message(&args.message)?;
    let files = read_files(&args.message).await?;

    match client.send_with_files(&message, &files).await? {
        SendOutcome::Delivered(delivery) => {
            success(&format!(
                "Message delivered (id {}, {} attempt(s))",
                delivery.id, delivery.attempts
            ));
            Ok(())
        }
        SendOutcome::FallbackDelivered { error, delivery } => {
            warn("The message could not be sent; error details were sent as attachments");
            info(&format!("Fallback delivery id {}", delivery.id));
            Err(error.into())
        }
    }
}
