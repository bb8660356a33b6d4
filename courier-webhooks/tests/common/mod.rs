//! Shared helpers for courier-webhooks integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use courier_webhooks::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub const WEBHOOK_URL: &str = "https://hooks.test/api/webhooks/1/token";

type Scripted = std::result::Result<TransportResponse, TransportError>;

/// Transport answering from a script; the last entry repeats forever
#[derive(Debug)]
pub struct MockTransport {
    script: Vec<Scripted>,
    requests: Mutex<Vec<WebhookBody>>,
    timeouts: Mutex<Vec<Duration>>,
}

impl MockTransport {
    pub fn new(script: Vec<Scripted>) -> Arc<Self> {
        assert!(!script.is_empty(), "script needs at least one response");
        Arc::new(Self {
            script,
            requests: Mutex::new(Vec::new()),
            timeouts: Mutex::new(Vec::new()),
        })
    }

    pub fn always(status: u16, body: &str) -> Arc<Self> {
        Self::new(vec![Ok(TransportResponse::new(status, body))])
    }

    pub fn statuses(statuses: &[(u16, &str)]) -> Arc<Self> {
        Self::new(
            statuses
                .iter()
                .map(|(status, body)| Ok(TransportResponse::new(*status, *body)))
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<WebhookBody> {
        self.requests.lock().clone()
    }

    /// Per-attempt timeout handed to each request
    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(
        &self,
        _url: &Url,
        body: &WebhookBody,
        timeout: Duration,
    ) -> std::result::Result<TransportResponse, TransportError> {
        self.timeouts.lock().push(timeout);
        let mut requests = self.requests.lock();
        let index = requests.len().min(self.script.len() - 1);
        requests.push(body.clone());
        self.script[index].clone()
    }
}

pub fn client(transport: Arc<MockTransport>) -> WebhookClient {
    let config = WebhookConfig::new(WEBHOOK_URL).unwrap();
    WebhookClient::with_transport(config, transport)
}

pub fn client_with(config: WebhookConfig, transport: Arc<MockTransport>) -> WebhookClient {
    WebhookClient::with_transport(config, transport)
}

pub fn text_file(name: &str) -> WebhookFile {
    WebhookFile::new(name, format!("contents of {}", name).into_bytes())
}
