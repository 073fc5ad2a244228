#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode, header},
    routing::post,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cedarheights::config::{
    Config, EmailConfig, ObservabilityConfig, ScheduleConfig, ServerConfig, SiteConfig,
};
use cedarheights::routes::{self, AppState};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        site: SiteConfig::default(),
        email: None,
        schedule: ScheduleConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_config_with_email(endpoint: &str) -> Config {
    let mut config = test_config();
    config.email = Some(EmailConfig {
        api_key: "xkeysib-test".to_string(),
        from_email: "hello@cedarheightsmusic.com".to_string(),
        from_name: "Cedar Heights Music Academy".to_string(),
        to_email: String::new(),
        endpoint: endpoint.to_string(),
        timeout_secs: 5,
    });
    config
}

pub fn router(config: Config) -> Router {
    let state = AppState::from_config(config).expect("failed to build app state");
    routes::router(state)
}

pub async fn get(app: Router, path: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

pub async fn post_form(app: Router, path: &str, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).expect("failed to encode form");
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// One email received by the stub provider.
#[derive(Clone, Debug)]
pub struct RecordedEmail {
    pub api_key: String,
    pub subject: String,
    pub to: String,
    pub sender: String,
}

#[derive(Clone)]
struct StubState {
    received: Arc<Mutex<Vec<RecordedEmail>>>,
    /// Requests whose subject contains this string get a 500.
    fail_subject_containing: Option<String>,
}

/// In-process stand-in for the transactional email provider. Records
/// every request; optionally refuses those matching a subject fragment.
pub struct StubProvider {
    pub endpoint: String,
    received: Arc<Mutex<Vec<RecordedEmail>>>,
}

impl StubProvider {
    pub async fn start(fail_subject_containing: Option<&str>) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            received: received.clone(),
            fail_subject_containing: fail_subject_containing.map(str::to_owned),
        };

        let app = Router::new()
            .route("/v3/smtp/email", post(stub_send))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub provider");
        let addr = listener.local_addr().expect("no local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub provider died");
        });

        StubProvider {
            endpoint: format!("http://{addr}/v3/smtp/email"),
            received,
        }
    }

    pub fn received(&self) -> Vec<RecordedEmail> {
        self.received.lock().expect("stub lock poisoned").clone()
    }
}

async fn stub_send(
    State(state): State<StubState>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> (StatusCode, Json<serde_json::Value>) {
    let subject = body
        .get("subject")
        .and_then(|s| s.as_str())
        .unwrap_or_default()
        .to_owned();

    state
        .received
        .lock()
        .expect("stub lock poisoned")
        .push(RecordedEmail {
            api_key: headers
                .get("api-key")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned(),
            subject: subject.clone(),
            to: body
                .pointer("/to/0/email")
                .and_then(|s| s.as_str())
                .unwrap_or_default()
                .to_owned(),
            sender: body
                .pointer("/sender/email")
                .and_then(|s| s.as_str())
                .unwrap_or_default()
                .to_owned(),
        });

    if let Some(fragment) = &state.fail_subject_containing {
        if subject.contains(fragment.as_str()) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": "stub failure" })),
            );
        }
    }

    (
        StatusCode::CREATED,
        Json(serde_json::json!({ "messageId": "stub" })),
    )
}
