//! Request body construction

use crate::{Message, WebhookFile};
use bytes::Bytes;

/// One binary part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// Form field name (`file1`, `file2`, ...)
    pub field_name: String,
    /// File name declared to the server
    pub file_name: String,
    pub content: Bytes,
}

/// Body of one webhook POST
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookBody {
    /// `application/json` body, used when no files are attached
    Json(String),

    /// `multipart/form-data` body: the message JSON as `payload_json`
    /// followed by one part per file
    Multipart {
        payload_json: String,
        parts: Vec<FilePart>,
    },
}

impl WebhookBody {
    /// Build the body for a message and its attachments
    pub fn build(message: &Message, files: &[WebhookFile]) -> Result<Self, serde_json::Error> {
        let payload_json = message.to_json()?;

        if files.is_empty() {
            return Ok(Self::Json(payload_json));
        }

        let parts = files
            .iter()
            .enumerate()
            .map(|(index, file)| FilePart {
                field_name: format!("file{}", index + 1),
                file_name: file.name().to_string(),
                content: file.content().clone(),
            })
            .collect();

        Ok(Self::Multipart {
            payload_json,
            parts,
        })
    }

    /// Content type of the body (without multipart boundary)
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Multipart { .. } => "multipart/form-data",
        }
    }

    /// The message JSON carried by the body
    pub fn payload_json(&self) -> &str {
        match self {
            Self::Json(json) => json,
            Self::Multipart { payload_json, .. } => payload_json,
        }
    }

    /// File parts, empty for a JSON body
    pub fn parts(&self) -> &[FilePart] {
        match self {
            Self::Json(_) => &[],
            Self::Multipart { parts, .. } => parts.as_slice(),
        }
    }

    pub fn file_count(&self) -> usize {
        self.parts().len()
    }
}
