//! Plain-text error reports attached to fallback sends

use crate::WebhookError;
use std::backtrace::Backtrace;
use std::error::Error as StdError;
use std::fmt::Write;

/// Crate that produced the error, reported as its source
pub const ERROR_SOURCE: &str = env!("CARGO_PKG_NAME");

/// Message of the innermost error in the source chain
pub fn root_cause(error: &WebhookError) -> String {
    let mut current: &dyn StdError = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}

/// Messages of every error below the top-level one, outermost first
pub fn source_chain(error: &WebhookError) -> Vec<String> {
    let mut chain = Vec::new();
    let mut current = error.source();
    while let Some(source) = current {
        chain.push(source.to_string());
        current = source.source();
    }
    chain
}

/// Builds the `error.txt` report for a failed send
#[derive(Debug)]
pub struct ErrorReport<'a> {
    error: &'a WebhookError,
    omitted_files: Vec<String>,
    backtrace: Backtrace,
}

impl<'a> ErrorReport<'a> {
    /// Capture a report; the backtrace honors `RUST_BACKTRACE`
    pub fn new(error: &'a WebhookError) -> Self {
        Self {
            error,
            omitted_files: Vec::new(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Name attachments that could not be forwarded
    pub fn with_omitted_files(mut self, names: Vec<String>) -> Self {
        self.omitted_files = names;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Message: {}", self.error);
        let _ = writeln!(out, "Error type: {}", self.error.kind_name());
        let _ = writeln!(out, "Source: {}", ERROR_SOURCE);
        let _ = writeln!(out, "Root cause: {}", root_cause(self.error));

        for (key, value) in self.error.context() {
            let _ = writeln!(out, "{}: {}", key, value);
        }

        if !self.omitted_files.is_empty() {
            let _ = writeln!(
                out,
                "Omitted attachments: {}",
                self.omitted_files.join(", ")
            );
        }

        let chain = source_chain(self.error);
        if !chain.is_empty() {
            out.push_str("Source chain:\n");
            for source in chain {
                let _ = writeln!(out, "- {}", source);
            }
        }

        let _ = write!(out, "Backtrace: {}", self.backtrace);
        out
    }
}
