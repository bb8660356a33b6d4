//! Diagnostic resend of a failed message

use crate::delivery::truncate;
use crate::diagnostics::{ErrorReport, root_cause};
use crate::embed::MAX_FIELD_VALUE_LENGTH;
use crate::{
    Embed, EmbedColor, EmbedField, MAX_FILES, Message, WebhookError, WebhookFile,
};

/// Content of the diagnostic message
pub const FALLBACK_CONTENT: &str = ":skull: **Webhook client error**: There was an error sending the message. The original message content and error details are attached as files.";

/// File name of the original message dump
pub const ORIGINAL_MESSAGE_FILE: &str = "original-message.txt";

/// File name of the error report
pub const ERROR_REPORT_FILE: &str = "error.txt";

/// Number of attachments the fallback adds
const DIAGNOSTIC_FILES: usize = 2;

/// The message and attachments sent in place of a failed message
#[derive(Debug, Clone)]
pub struct FallbackPackage {
    pub message: Message,
    pub files: Vec<WebhookFile>,
    /// Caller files left out to stay within the attachment limit
    pub omitted: Vec<String>,
}

impl FallbackPackage {
    /// Package a failed send: caller files first (as many as fit), then the
    /// original message dump and the error report
    pub fn build(original: &Message, error: &WebhookError, files: &[WebhookFile]) -> Self {
        let forwarded = files.len().min(MAX_FILES - DIAGNOSTIC_FILES);
        let omitted: Vec<String> = files[forwarded..]
            .iter()
            .map(|file| file.name().to_string())
            .collect();

        let message = Message::builder()
            .content(FALLBACK_CONTENT)
            .embed(
                Embed::builder()
                    .color(EmbedColor::Red)
                    .field(EmbedField::new(
                        "Error",
                        truncate(&root_cause(error), MAX_FIELD_VALUE_LENGTH),
                    ))
                    .field(EmbedField::new("Type", error.kind_name()))
                    .build(),
            )
            .build();

        let report = ErrorReport::new(error)
            .with_omitted_files(omitted.clone())
            .render();

        let mut attachments = files[..forwarded].to_vec();
        attachments.push(WebhookFile::new(
            ORIGINAL_MESSAGE_FILE,
            original.to_text().into_bytes(),
        ));
        attachments.push(WebhookFile::new(ERROR_REPORT_FILE, report.into_bytes()));

        Self {
            message,
            files: attachments,
            omitted,
        }
    }
}
