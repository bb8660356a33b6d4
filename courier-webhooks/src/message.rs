//! Webhook message document

use crate::Embed;
use courier_validation::{MaxItems, MaxLength, Notifiable, Violations};
use serde::Serialize;
use std::fmt::Write;

/// Maximum message content length, in characters
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Maximum number of embeds per message
pub const MAX_EMBEDS: usize = 10;

/// A message to be posted to a webhook.
///
/// Built once through [`Message::new`] or [`Message::builder`] and
/// validated while it is built; constraint failures are recorded, never
/// raised. Check [`Notifiable::is_valid`] or let the client reject it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    /// Overrides the current username of the webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    /// Overrides the default avatar of the webhook
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,

    /// Message text (up to 2000 characters)
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// Read the message aloud in chat
    tts: bool,

    /// Rich embed cards
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<Embed>,

    #[serde(skip)]
    violations: Violations,
}

impl Message {
    /// Create a plain text message
    pub fn new(content: impl Into<String>) -> Self {
        Self::builder().content(content).build()
    }

    /// Create a builder for a message with overrides or embeds
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Start a new builder from this message's values
    pub fn to_builder(&self) -> MessageBuilder {
        MessageBuilder {
            content: self.content.clone(),
            username: self.username.clone(),
            avatar_url: self.avatar_url.clone(),
            tts: self.tts,
            embeds: self.embeds.clone(),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn tts(&self) -> bool {
        self.tts
    }

    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Serialize to the webhook JSON body
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable dump of every field, embed and sub-object
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        push_line(&mut out, "Content", self.content.as_deref());
        push_line(&mut out, "Username", self.username.as_deref());
        push_line(&mut out, "Avatar URL", self.avatar_url.as_deref());
        let _ = writeln!(out, "TTS: {}", self.tts);

        for (index, embed) in self.embeds.iter().enumerate() {
            let _ = writeln!(out, "- Embed #{}", index + 1);
            out.push_str(&embed.to_text());
        }

        out
    }

    fn check(&self) -> Violations {
        let mut violations = Violations::new();

        violations
            .check(MaxLength(MAX_CONTENT_LENGTH).check(self.content.as_deref(), |n| {
                format!(
                    "The \"content\" length limit is {} characters (actual length is {}).",
                    MAX_CONTENT_LENGTH, n
                )
            }))
            .check(MaxItems(MAX_EMBEDS).check(self.embeds.len(), |n| {
                format!(
                    "The \"embeds\" collection size limit is {} elements. (actual size is {})",
                    MAX_EMBEDS, n
                )
            }));
        violations.merge_all(&self.embeds);

        violations
    }
}

impl Notifiable for Message {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Builder for [`Message`]
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    content: Option<String>,
    username: Option<String>,
    avatar_url: Option<String>,
    tts: bool,
    embeds: Vec<Embed>,
}

impl MessageBuilder {
    /// Set the message text
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Override the webhook username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Override the webhook avatar
    pub fn avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Enable text-to-speech
    pub fn tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Append one embed
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Append embeds. Absent (`None`) entries are dropped silently and do
    /// not count towards the embed limit.
    pub fn embeds<I, E>(mut self, embeds: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Option<Embed>>,
    {
        self.embeds
            .extend(embeds.into_iter().filter_map(|embed| embed.into()));
        self
    }

    /// Build and validate the message
    pub fn build(self) -> Message {
        let mut message = Message {
            username: normalize(self.username).filter(|v| !v.is_empty()),
            avatar_url: normalize(self.avatar_url).filter(|v| !v.is_empty()),
            content: normalize(self.content),
            tts: self.tts,
            embeds: self.embeds,
            violations: Violations::new(),
        };
        message.violations = message.check();
        message
    }
}

/// Trim surrounding whitespace; absent stays absent
pub(crate) fn normalize(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

/// Append `label: value` when the value is present and not empty
pub(crate) fn push_line(out: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        let _ = writeln!(out, "{}: {}", label, value);
    }
}
