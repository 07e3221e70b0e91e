#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use airwatch_api::config::ServerConfig;
use airwatch_api::router::build_app_router;
use airwatch_api::state::AppState;
use airwatch_core::channels::Channel;
use airwatch_core::preferences::AlertPreferencesInput;
use airwatch_core::store::save;
use airwatch_core::types::UserId;
use airwatch_db::InMemorySettingsStore;
use airwatch_dispatch::{AlertProcessor, ChannelSender, Dispatcher, SendError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        channel_send_timeout_ms: 1_000,
        database_url: None,
    }
}

// ---------------------------------------------------------------------------
// Recording sender
// ---------------------------------------------------------------------------

/// One send observed by a [`RecordingSender`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel: Channel,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Sender that records every call into a shared log and optionally fails.
pub struct RecordingSender {
    channel: Channel,
    fail: bool,
    log: Arc<Mutex<Vec<SentMessage>>>,
}

#[async_trait]
impl ChannelSender for RecordingSender {
    fn channel(&self) -> Channel {
        self.channel
    }

    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<String, SendError> {
        self.log.lock().unwrap().push(SentMessage {
            channel: self.channel,
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        if self.fail {
            Err(SendError::Unavailable("gateway down".into()))
        } else {
            Ok(format!("{} delivered", self.channel))
        }
    }
}

// ---------------------------------------------------------------------------
// Test app
// ---------------------------------------------------------------------------

/// The router plus handles onto its in-memory store and sender log.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemorySettingsStore>,
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl TestApp {
    /// Messages recorded so far, in send order.
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Store valid preferences for a fresh user and return its id.
    pub async fn seed_user(&self, input: AlertPreferencesInput) -> UserId {
        let user_id = UserId::new_v4();
        save(self.store.as_ref(), user_id, input).await.unwrap();
        user_id
    }
}

/// Build the full application with every channel recording successfully.
pub fn build_test_app() -> TestApp {
    build_test_app_failing(&[])
}

/// Build the full application; sends on `failing` channels return an error.
pub fn build_test_app_failing(failing: &[Channel]) -> TestApp {
    let config = test_config();
    let store = Arc::new(InMemorySettingsStore::new());
    let sent = Arc::new(Mutex::new(Vec::new()));

    let dispatcher = Channel::ALL.into_iter().fold(
        Dispatcher::new(Duration::from_millis(config.channel_send_timeout_ms)),
        |dispatcher, channel| {
            dispatcher.with_sender(Arc::new(RecordingSender {
                channel,
                fail: failing.contains(&channel),
                log: Arc::clone(&sent),
            }))
        },
    );

    let state = AppState {
        store: store.clone(),
        processor: AlertProcessor::new(store.clone(), Arc::new(dispatcher)),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        store,
        sent,
    }
}

/// Preferences with email and push enabled, SMS off, threshold 100.
pub fn default_input() -> AlertPreferencesInput {
    AlertPreferencesInput {
        email: "user@example.com".into(),
        phone: Some("+15551234567".into()),
        push_enabled: true,
        email_enabled: true,
        sms_enabled: false,
        threshold: 100.0,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: &Router, uri: &str) -> axum::response::Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> axum::response::Response {
    send_raw(app, "POST", uri, body.to_string()).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> axum::response::Response {
    send_raw(app, "PUT", uri, body.to_string()).await
}

/// Send an arbitrary body with a JSON content type.
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: impl Into<Body>,
) -> axum::response::Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the status and return the parsed body.
pub async fn expect_json(
    response: axum::response::Response,
    status: StatusCode,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

pub fn settings_uri(user_id: UserId) -> String {
    format!("/api/v1/users/{user_id}/alert-settings")
}
