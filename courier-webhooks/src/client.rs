//! Webhook client for sending messages

use crate::fallback::FallbackPackage;
use crate::retry::StatusClass;
use crate::{
    AttemptOutcome, Message, RateLimitResponse, ReqwestTransport, Result, SendOutcome, Transport,
    TransportResponse, WebhookBody, WebhookConfig, WebhookDelivery, WebhookError, WebhookFile,
    check_file_count,
};
use courier_config::WebhookSettings;
use courier_validation::Violations;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Per-call send options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    /// On failure, resend the message and error details as attachments
    pub attach_on_error: bool,
}

impl SendOptions {
    /// Options enabling the attachment fallback
    pub fn attach_on_error() -> Self {
        Self {
            attach_on_error: true,
        }
    }
}

/// Every violation that would stop a send: the message, each file, then
/// the file count, in that order
pub fn validate_send(message: &Message, files: &[WebhookFile]) -> Violations {
    let mut violations = Violations::new();
    violations.merge(message);
    violations.merge_all(files);
    violations.check(check_file_count(files.len()));
    violations
}

/// Client for one webhook endpoint.
///
/// Holds only immutable configuration and a shared transport, so clones
/// are cheap and may be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    config: WebhookConfig,
    transport: Arc<dyn Transport>,
}

impl WebhookClient {
    /// Create a client using the default HTTP transport
    pub fn new(config: WebhookConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client for a URL with default configuration
    pub fn from_url(url: &str) -> Result<Self> {
        Self::new(WebhookConfig::new(url)?)
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &WebhookSettings) -> Result<Self> {
        Self::new(WebhookConfig::from_settings(settings)?)
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: WebhookConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Get the configuration
    pub fn config(&self) -> &WebhookConfig {
        &self.config
    }

    /// Send a message, using the configured fallback behavior
    pub async fn send(&self, message: &Message) -> Result<SendOutcome> {
        self.send_with_files(message, &[]).await
    }

    /// Send a message with attachments, using the configured fallback behavior
    pub async fn send_with_files(
        &self,
        message: &Message,
        files: &[WebhookFile],
    ) -> Result<SendOutcome> {
        let options = SendOptions {
            attach_on_error: self.config.attach_on_error,
        };
        self.send_with_options(message, files, options).await
    }

    /// Send a message with attachments and explicit options.
    ///
    /// With `attach_on_error`, a failed send is followed by exactly one
    /// diagnostic send; its success is reported as
    /// [`SendOutcome::FallbackDelivered`], never as success.
    pub async fn send_with_options(
        &self,
        message: &Message,
        files: &[WebhookFile],
        options: SendOptions,
    ) -> Result<SendOutcome> {
        match self.deliver(message, files).await {
            Ok(delivery) => Ok(SendOutcome::Delivered(delivery)),
            Err(error) if !options.attach_on_error => Err(error),
            Err(error) => self.send_fallback(message, files, error).await,
        }
    }

    /// Validate, build and deliver one message, retrying per the policy.
    /// Never falls back.
    pub async fn deliver(
        &self,
        message: &Message,
        files: &[WebhookFile],
    ) -> Result<WebhookDelivery> {
        let message = self.with_defaults(message);
        Self::validate(&message, files)?;

        let body = WebhookBody::build(&message, files)?;
        let policy = &self.config.retry_policy;
        let mut delivery = WebhookDelivery::new(files.len());

        debug!(
            delivery_id = %delivery.id,
            host = self.config.url.host_str().unwrap_or_default(),
            files = files.len(),
            content_type = body.content_type(),
            "Sending webhook message"
        );

        loop {
            delivery.start_attempt();
            let attempt = delivery.attempts;

            match self.attempt(&body, attempt).await {
                AttemptOutcome::Success(response) => {
                    info!(
                        delivery_id = %delivery.id,
                        attempt,
                        status = response.status,
                        "Webhook message delivered"
                    );
                    delivery.mark_succeeded(response.status, &response.body);
                    return Ok(delivery);
                }
                AttemptOutcome::Retry { error: err, delay } => {
                    if !policy.should_retry(attempt) {
                        error!(
                            delivery_id = %delivery.id,
                            attempt,
                            error = %err,
                            "Webhook delivery failed, retries exhausted"
                        );
                        return Err(err);
                    }

                    let wait = delay.unwrap_or_else(|| policy.delay_for_retry(attempt));
                    warn!(
                        delivery_id = %delivery.id,
                        attempt,
                        status = err.status_code(),
                        delay_ms = wait.as_millis() as u64,
                        error = %err,
                        "Webhook delivery attempt failed, retrying"
                    );
                    delivery.mark_retrying(&err);
                    tokio::time::sleep(wait).await;
                }
                AttemptOutcome::Terminal(err) => {
                    error!(
                        delivery_id = %delivery.id,
                        attempt,
                        error = %err,
                        "Webhook delivery failed"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Make one attempt and classify what came back
    async fn attempt(&self, body: &WebhookBody, attempt: u32) -> AttemptOutcome<TransportResponse> {
        let policy = &self.config.retry_policy;
        let result = self
            .transport
            .post(&self.config.url, body, self.config.timeout)
            .await;

        let response = match result {
            Ok(response) => response,
            Err(source) => {
                let retryable = source.is_retryable();
                let error = WebhookError::Transport {
                    source,
                    attempts: attempt,
                };
                return if retryable {
                    AttemptOutcome::Retry { error, delay: None }
                } else {
                    AttemptOutcome::Terminal(error)
                };
            }
        };

        match policy.classify(response.status) {
            StatusClass::Success => AttemptOutcome::Success(response),
            StatusClass::RateLimited => {
                let rate_limit = RateLimitResponse::parse(&response.body);
                if rate_limit.is_none() {
                    debug!(attempt, "Rate limit response carried no retry_after");
                }
                AttemptOutcome::Retry {
                    delay: rate_limit
                        .as_ref()
                        .map(|limit| policy.rate_limit_delay(limit.retry_after)),
                    error: WebhookError::RateLimitExceeded {
                        retry_after: rate_limit.map(|limit| limit.retry_after),
                        body: response.body,
                        attempts: attempt,
                    },
                }
            }
            StatusClass::Retryable => AttemptOutcome::Retry {
                error: WebhookError::Delivery {
                    status: response.status,
                    body: response.body,
                    attempts: attempt,
                },
                delay: None,
            },
            StatusClass::Terminal => AttemptOutcome::Terminal(WebhookError::Delivery {
                status: response.status,
                body: response.body,
                attempts: attempt,
            }),
        }
    }

    async fn send_fallback(
        &self,
        original: &Message,
        files: &[WebhookFile],
        error: WebhookError,
    ) -> Result<SendOutcome> {
        let package = FallbackPackage::build(original, &error, files);
        warn!(
            error = %error,
            files = package.files.len(),
            omitted = package.omitted.len(),
            "Sending failed message as attachments"
        );

        match self.deliver(&package.message, &package.files).await {
            Ok(delivery) => Ok(SendOutcome::FallbackDelivered { error, delivery }),
            Err(cause) if cause.is_validation() => Err(cause),
            Err(cause) => Err(WebhookError::Fallback {
                original: Box::new(error),
                cause: Box::new(cause),
            }),
        }
    }

    fn validate(message: &Message, files: &[WebhookFile]) -> Result<()> {
        let violations = validate_send(message, files);

        if violations.is_empty() {
            Ok(())
        } else {
            debug!(violations = violations.len(), "Message rejected before sending");
            Err(WebhookError::Validation { violations })
        }
    }

    /// Apply the configured username and avatar where the message sets none
    fn with_defaults<'m>(&self, message: &'m Message) -> Cow<'m, Message> {
        let username = self
            .config
            .username
            .as_deref()
            .filter(|_| message.username().is_none());
        let avatar_url = self
            .config
            .avatar_url
            .as_deref()
            .filter(|_| message.avatar_url().is_none());

        if username.is_none() && avatar_url.is_none() {
            return Cow::Borrowed(message);
        }

        let mut builder = message.to_builder();
        if let Some(username) = username {
            builder = builder.username(username);
        }
        if let Some(avatar_url) = avatar_url {
            builder = builder.avatar_url(avatar_url);
        }
        Cow::Owned(builder.build())
    }
}
