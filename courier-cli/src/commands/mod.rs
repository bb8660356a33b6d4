//! CLI command implementations.

pub mod check;
pub mod send;

use crate::MessageArgs;
use crate::error::{CliError, CliResult};
use courier_webhooks::{Embed, EmbedColor, EmbedField, Message, WebhookFile};

/// Build the message described on the command line.
pub fn build_message(args: &MessageArgs) -> CliResult<Message> {
    let mut builder = Message::builder().tts(args.tts);

    if let Some(content) = &args.content {
        builder = builder.content(content);
    }
    if let Some(username) = &args.username {
        builder = builder.username(username);
    }
    if let Some(avatar_url) = &args.avatar_url {
        builder = builder.avatar_url(avatar_url);
    }

    let wants_embed = args.title.is_some()
        || args.description.is_some()
        || args.color.is_some()
        || !args.fields.is_empty();

    if wants_embed {
        let mut embed = Embed::builder().fields(
            args.fields
                .iter()
                .map(|(name, value)| EmbedField::new(name, value)),
        );
        if let Some(title) = &args.title {
            embed = embed.title(title);
        }
        if let Some(description) = &args.description {
            embed = embed.description(description);
        }
        if let Some(color) = &args.color {
            let color = EmbedColor::parse(color).ok_or_else(|| {
                CliError::InvalidArgument(format!("unknown color `{}`", color))
            })?;
            embed = embed.color(color);
        }
        builder = builder.embed(embed.build());
    }

    Ok(builder.build())
}

/// Read every attachment named on the command line.
pub async fn read_files(args: &MessageArgs) -> CliResult<Vec<WebhookFile>> {
    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        files.push(WebhookFile::from_path(path).await?);
    }
    Ok(files)
}
