//! HTTP transport abstraction

use crate::{TransportError, WebhookBody, WebhookError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use url::Url;

/// Status and body of one HTTP answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one request and reports what came back.
///
/// Implementations never retry; the client's pipeline owns that.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn post(
        &self,
        url: &Url,
        body: &WebhookBody,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// Default transport backed by a pooled `reqwest` client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    /// Create a transport sending the given User-Agent
    pub fn new(user_agent: &str) -> Result<Self, WebhookError> {
        let http_client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| WebhookError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }

    /// Wrap an existing client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &Url,
        body: &WebhookBody,
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        let request = self.http_client.post(url.clone()).timeout(timeout);

        let request = match body {
            WebhookBody::Json(json) => request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json.clone()),
            WebhookBody::Multipart {
                payload_json,
                parts,
            } => {
                let mut form = Form::new().text("payload_json", payload_json.clone());
                for part in parts {
                    form = form.part(
                        part.field_name.clone(),
                        Part::bytes(part.content.to_vec()).file_name(part.file_name.clone()),
                    );
                }
                request.multipart(form)
            }
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
