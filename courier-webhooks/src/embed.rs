//! Rich embed cards and their sub-objects

use crate::EmbedColor;
use crate::message::{normalize, push_line};
use courier_validation::{MaxItems, MaxLength, NotEmpty, Notifiable, Violations};
use serde::Serialize;
use std::fmt::Write;

/// Maximum embed title length
pub const MAX_TITLE_LENGTH: usize = 256;

/// Maximum embed description length
pub const MAX_DESCRIPTION_LENGTH: usize = 2048;

/// Maximum number of fields per embed
pub const MAX_FIELDS: usize = 25;

/// Maximum author name length
pub const MAX_AUTHOR_NAME_LENGTH: usize = 256;

/// Maximum field name length
pub const MAX_FIELD_NAME_LENGTH: usize = 256;

/// Maximum field value length
pub const MAX_FIELD_VALUE_LENGTH: usize = 1024;

/// Maximum footer text length
pub const MAX_FOOTER_TEXT_LENGTH: usize = 2048;

/// A rich card attached to a message.
///
/// The embed's own rules are checked first, then the violations of its
/// author, fields (in order), thumbnail, image and footer are folded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<EmbedAuthor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<EmbedField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail: Option<EmbedThumbnail>,

    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<EmbedImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<EmbedFooter>,

    #[serde(skip)]
    violations: Violations,
}

impl Embed {
    /// Create a builder for an embed
    pub fn builder() -> EmbedBuilder {
        EmbedBuilder::default()
    }

    /// Start a new builder from this embed's values
    pub fn to_builder(&self) -> EmbedBuilder {
        EmbedBuilder {
            color: self.color,
            author: self.author.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
            description: self.description.clone(),
            fields: self.fields.clone(),
            thumbnail: self.thumbnail.clone(),
            image: self.image.clone(),
            footer: self.footer.clone(),
        }
    }

    pub fn color(&self) -> Option<u32> {
        self.color
    }

    pub fn author(&self) -> Option<&EmbedAuthor> {
        self.author.as_ref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[EmbedField] {
        &self.fields
    }

    pub fn thumbnail(&self) -> Option<&EmbedThumbnail> {
        self.thumbnail.as_ref()
    }

    pub fn image(&self) -> Option<&EmbedImage> {
        self.image.as_ref()
    }

    pub fn footer(&self) -> Option<&EmbedFooter> {
        self.footer.as_ref()
    }

    /// Plain-text dump of the embed and its sub-objects
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if let Some(color) = self.color {
            let _ = writeln!(out, "Embed color: {}", color);
        }
        if let Some(author) = &self.author {
            out.push_str(&author.to_text());
        }
        push_line(&mut out, "Embed title", self.title.as_deref());
        push_line(&mut out, "Embed URL", self.url.as_deref());
        push_line(&mut out, "Embed description", self.description.as_deref());
        for (index, field) in self.fields.iter().enumerate() {
            let _ = writeln!(out, "- Embed field #{}", index + 1);
            out.push_str(&field.to_text());
        }
        if let Some(thumbnail) = &self.thumbnail {
            out.push_str(&thumbnail.to_text());
        }
        if let Some(image) = &self.image {
            out.push_str(&image.to_text());
        }
        if let Some(footer) = &self.footer {
            out.push_str(&footer.to_text());
        }

        out
    }

    fn check(&self) -> Violations {
        let mut violations = Violations::new();

        violations
            .check(MaxLength(MAX_TITLE_LENGTH).check(self.title.as_deref(), |n| {
                format!(
                    "The embed \"title\" length limit is {} characters (actual length is {}).",
                    MAX_TITLE_LENGTH, n
                )
            }))
            .check(
                MaxLength(MAX_DESCRIPTION_LENGTH).check(self.description.as_deref(), |n| {
                    format!(
                        "The embed \"description\" length limit is {} characters (actual length is {}).",
                        MAX_DESCRIPTION_LENGTH, n
                    )
                }),
            )
            .check(MaxItems(MAX_FIELDS).check(self.fields.len(), |n| {
                format!(
                    "The embed \"fields\" collection size limit is {} elements. (actual size is {})",
                    MAX_FIELDS, n
                )
            }));

        if let Some(author) = &self.author {
            violations.merge(author);
        }
        violations.merge_all(&self.fields);
        if let Some(thumbnail) = &self.thumbnail {
            violations.merge(thumbnail);
        }
        if let Some(image) = &self.image {
            violations.merge(image);
        }
        if let Some(footer) = &self.footer {
            violations.merge(footer);
        }

        violations
    }
}

impl Notifiable for Embed {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Builder for [`Embed`]
#[derive(Debug, Clone, Default)]
pub struct EmbedBuilder {
    color: Option<u32>,
    author: Option<EmbedAuthor>,
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    fields: Vec<EmbedField>,
    thumbnail: Option<EmbedThumbnail>,
    image: Option<EmbedImage>,
    footer: Option<EmbedFooter>,
}

impl EmbedBuilder {
    /// Set the side bar color, as a named color or a raw `0xRRGGBB` value
    pub fn color(mut self, color: impl Into<EmbedColor>) -> Self {
        self.color = Some(color.into().value());
        self
    }

    pub fn author(mut self, author: EmbedAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append one field
    pub fn field(mut self, field: EmbedField) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields, in order
    pub fn fields(mut self, fields: impl IntoIterator<Item = EmbedField>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn thumbnail(mut self, thumbnail: EmbedThumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn image(mut self, image: EmbedImage) -> Self {
        self.image = Some(image);
        self
    }

    pub fn footer(mut self, footer: EmbedFooter) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Build and validate the embed
    pub fn build(self) -> Embed {
        let mut embed = Embed {
            color: self.color,
            author: self.author,
            title: normalize(self.title),
            url: normalize(self.url),
            description: normalize(self.description),
            fields: self.fields,
            thumbnail: self.thumbnail,
            image: self.image,
            footer: self.footer,
            violations: Violations::new(),
        };
        embed.violations = embed.check();
        embed
    }
}

/// Author block shown above the embed title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedAuthor {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,

    #[serde(skip)]
    violations: Violations,
}

impl EmbedAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self::validated(name.into(), None, None)
    }

    /// Link the author name
    pub fn with_url(self, url: impl Into<String>) -> Self {
        Self::validated(self.name, Some(url.into()), self.icon_url)
    }

    /// Show an icon next to the author name
    pub fn with_icon_url(self, icon_url: impl Into<String>) -> Self {
        Self::validated(self.name, self.url, Some(icon_url.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Embed author name", Some(self.name.as_str()));
        push_line(&mut out, "Embed author URL", self.url.as_deref());
        push_line(&mut out, "Embed author icon URL", self.icon_url.as_deref());
        out
    }

    fn validated(name: String, url: Option<String>, icon_url: Option<String>) -> Self {
        let name = name.trim().to_string();
        let mut violations = Violations::new();
        violations
            .check(NotEmpty::check(
                Some(name.as_str()),
                "The embed author \"name\" cannot be null or empty.",
            ))
            .check(MaxLength(MAX_AUTHOR_NAME_LENGTH).check(Some(name.as_str()), |n| {
                format!(
                    "The embed author \"name\" length limit is {} characters (actual length is {}).",
                    MAX_AUTHOR_NAME_LENGTH, n
                )
            }));

        Self {
            name,
            url: normalize(url),
            icon_url: normalize(icon_url),
            violations,
        }
    }
}

impl Notifiable for EmbedAuthor {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// A name/value pair rendered inside an embed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,

    inline: bool,

    #[serde(skip)]
    violations: Violations,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::validated(name.into(), Some(value.into()), false)
    }

    /// A field with a name and no value
    pub fn named(name: impl Into<String>) -> Self {
        Self::validated(name.into(), None, false)
    }

    /// Render the field side by side with its neighbours
    pub fn inline(self) -> Self {
        Self::validated(self.name, self.value, true)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Embed field name", Some(self.name.as_str()));
        push_line(&mut out, "Embed field value", self.value.as_deref());
        let _ = writeln!(out, "Embed field inline: {}", self.inline);
        out
    }

    fn validated(name: String, value: Option<String>, inline: bool) -> Self {
        let name = name.trim().to_string();
        let value = normalize(value);
        let mut violations = Violations::new();
        violations
            .check(NotEmpty::check(
                Some(name.as_str()),
                "The embed field \"name\" cannot be null or empty.",
            ))
            .check(MaxLength(MAX_FIELD_NAME_LENGTH).check(Some(name.as_str()), |n| {
                format!(
                    "The embed field \"name\" length limit is {} characters (actual length is {}).",
                    MAX_FIELD_NAME_LENGTH, n
                )
            }))
            .check(MaxLength(MAX_FIELD_VALUE_LENGTH).check(value.as_deref(), |n| {
                format!(
                    "The embed field \"value\" length limit is {} characters (actual length is {}).",
                    MAX_FIELD_VALUE_LENGTH, n
                )
            }));

        Self {
            name,
            value,
            inline,
            violations,
        }
    }
}

impl Notifiable for EmbedField {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Small image shown in the top right corner of an embed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedThumbnail {
    url: String,

    #[serde(skip)]
    violations: Violations,
}

impl EmbedThumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim().to_string();
        let mut violations = Violations::new();
        violations.check(NotEmpty::check(
            Some(url.as_str()),
            "The embed thumbnail \"url\" cannot be null or empty.",
        ));
        Self { url, violations }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Embed thumbnail URL", Some(self.url.as_str()));
        out
    }
}

impl Notifiable for EmbedThumbnail {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Large image shown below the embed body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    url: String,

    #[serde(skip)]
    violations: Violations,
}

impl EmbedImage {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into().trim().to_string();
        let mut violations = Violations::new();
        violations.check(NotEmpty::check(
            Some(url.as_str()),
            "The embed image \"url\" cannot be null or empty.",
        ));
        Self { url, violations }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Embed image URL", Some(self.url.as_str()));
        out
    }
}

impl Notifiable for EmbedImage {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Footer line at the bottom of an embed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    icon_url: Option<String>,

    #[serde(skip)]
    violations: Violations,
}

impl EmbedFooter {
    pub fn new(text: impl Into<String>) -> Self {
        Self::validated(text.into(), None)
    }

    pub fn with_icon_url(self, icon_url: impl Into<String>) -> Self {
        Self::validated(self.text, Some(icon_url.into()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        push_line(&mut out, "Embed footer text", Some(self.text.as_str()));
        push_line(&mut out, "Embed footer icon URL", self.icon_url.as_deref());
        out
    }

    fn validated(text: String, icon_url: Option<String>) -> Self {
        let text = text.trim().to_string();
        let mut violations = Violations::new();
        violations
            .check(NotEmpty::check(
                Some(text.as_str()),
                "The embed footer \"text\" cannot be null or empty.",
            ))
            .check(MaxLength(MAX_FOOTER_TEXT_LENGTH).check(Some(text.as_str()), |n| {
                format!(
                    "The embed footer \"text\" length limit is {} characters (actual length is {}).",
                    MAX_FOOTER_TEXT_LENGTH, n
                )
            }));

        Self {
            text,
            icon_url: normalize(icon_url),
            violations,
        }
    }
}

impl Notifiable for EmbedFooter {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}
