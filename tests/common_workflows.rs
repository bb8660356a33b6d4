//! Integration tests for common Courier workflows.
//!
//! These tests go through the facade crate the way an application would.

use async_trait::async_trait;
use courier::courier_webhooks::{Transport, TransportError, TransportResponse, WebhookBody};
use courier::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

#[derive(Debug, Default)]
struct Recorder {
    bodies: Mutex<Vec<WebhookBody>>,
}

#[async_trait]
impl Transport for Recorder {
    async fn post(
        &self,
        _url: &Url,
        body: &WebhookBody,
        _timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        self.bodies.lock().unwrap().push(body.clone());
        Ok(TransportResponse::new(204, ""))
    }
}

// =============================================================================
// Composing messages
// =============================================================================

#[test]
fn test_build_status_report() {
    let message = Message::builder()
        .username("Deploy Bot")
        .content("Deployment finished")
        .embed(
            Embed::builder()
                .title("api-server")
                .color(EmbedColor::Green)
                .author(EmbedAuthor::new("CI"))
                .field(EmbedField::new("Version", "1.4.2").inline())
                .field(EmbedField::new("Region", "eu-west-1").inline())
                .footer(EmbedFooter::new("build #812"))
                .build(),
        )
        .build();

    assert!(message.is_valid());

    let json: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
    assert_eq!(json["embeds"][0]["fields"][1]["value"], "eu-west-1");
    assert_eq!(json["embeds"][0]["color"], EmbedColor::Green.value());
}

#[test]
fn test_every_problem_is_reported_at_once() {
    let message = Message::builder()
        .content("x".repeat(2001))
        .embed(
            Embed::builder()
                .title("t".repeat(300))
                .image(EmbedImage::new(""))
                .thumbnail(EmbedThumbnail::new(""))
                .build(),
        )
        .build();

    assert_eq!(message.violation_messages().len(), 4);
}

// =============================================================================
// Settings to client
// =============================================================================

#[tokio::test]
async fn test_settings_to_delivery() {
    let settings = SettingsLoader::new()
        .set("webhook_url", "https://hooks.test/api/webhooks/1/token")
        .set("username", "Courier")
        .load()
        .unwrap();

    let config = WebhookConfig::from_settings(&settings).unwrap();
    let recorder = Arc::new(Recorder::default());
    let client = WebhookClient::with_transport(config, recorder.clone());

    let files = vec![WebhookFile::new("log.txt", "line 1\nline 2\n")];
    let outcome = client
        .send_with_files(&Message::new("nightly log"), &files)
        .await
        .unwrap();

    assert!(outcome.is_success());

    let bodies = recorder.bodies.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].file_count(), 1);
    assert!(bodies[0].payload_json().contains("\"username\":\"Courier\""));
}
