//! File attachments

use bytes::Bytes;
use courier_validation::{MaxItems, NotEmpty, Notifiable, Violation, Violations};
use std::path::Path;

/// Maximum number of files sent with one message
pub const MAX_FILES: usize = 10;

/// A named binary attachment
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookFile {
    name: String,
    content: Bytes,
    violations: Violations,
}

impl WebhookFile {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let name = name.into().trim().to_string();
        let content = content.into();

        let mut violations = Violations::new();
        violations
            .check(NotEmpty::check(
                Some(name.as_str()),
                "The file \"name\" cannot be null or empty.",
            ))
            .check(NotEmpty::check_bytes(
                &content,
                "The file \"content\" cannot be null or empty.",
            ));

        Self {
            name,
            content,
            violations,
        }
    }

    /// Read a file from disk, named after its file name
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self::new(name, content))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Notifiable for WebhookFile {
    fn violations(&self) -> &Violations {
        &self.violations
    }
}

/// Check the number of files attached to one send
pub fn check_file_count(count: usize) -> Result<(), Violation> {
    MaxItems(MAX_FILES).check(count, |n| {
        format!(
            "Files collection size limit is {} objects. (actual size is {})",
            MAX_FILES, n
        )
    })
}
