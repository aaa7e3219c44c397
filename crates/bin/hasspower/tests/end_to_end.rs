//! End-to-end tests for the full hasspower stack.
//!
//! Each test wires the real reqwest client and the bundled English
//! catalogue into `PowerService`, and points it at a fake Home Assistant
//! served by axum on an ephemeral local port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use hasspower_adapter_http_reqwest::{HttpClientConfig, ReqwestHttpClient};
use hasspower_adapter_locale_json::JsonLocalizer;
use hasspower_app::services::power_service::PowerService;
use hasspower_domain::entity::Entity;
use hasspower_domain::outcome::OutcomeCode;

#[derive(Debug, Clone)]
struct Received {
    authorization: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct FakeHass {
    status: StatusCode,
    delay: Duration,
    received: Arc<Mutex<Vec<Received>>>,
}

async fn script_started(
    State(hass): State<FakeHass>,
    headers: HeaderMap,
    body: String,
) -> StatusCode {
    tokio::time::sleep(hass.delay).await;
    hass.received.lock().unwrap().push(Received {
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    });
    hass.status
}

async fn root(State(hass): State<FakeHass>) -> StatusCode {
    hass.status
}

/// Start a fake Home Assistant answering every request with `status`.
///
/// Returns the `host` (without scheme), the port, and the request log.
async fn fake_hass(status: StatusCode) -> (String, String, Arc<Mutex<Vec<Received>>>) {
    slow_hass(status, Duration::ZERO).await
}

/// Like [`fake_hass`], but the event endpoint waits `delay` before answering.
async fn slow_hass(
    status: StatusCode,
    delay: Duration,
) -> (String, String, Arc<Mutex<Vec<Received>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/", get(root))
        .route("/api/events/script_started", post(script_started))
        .with_state(FakeHass {
            status,
            delay,
            received: Arc::clone(&received),
        });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr.ip().to_string(), addr.port().to_string(), received)
}

type Service = PowerService<HashMap<String, String>, JsonLocalizer, ReqwestHttpClient>;

fn service(entries: &[(&str, &str)]) -> Service {
    let config = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    PowerService::new(
        config,
        JsonLocalizer::bundled("en").unwrap(),
        ReqwestHttpClient::new(&HttpClientConfig::default()).unwrap(),
    )
}

fn lamp() -> Vec<Entity> {
    vec![Entity::new("device", "Lamp")]
}

// ---------------------------------------------------------------------------
// Power commands
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_turn_on_lamp_through_home_assistant() {
    let (host, port, received) = fake_hass(StatusCode::OK).await;
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", host.as_str()),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_on("Turn on the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::TurnedOnDevice);
    assert_eq!(outcome.speech, "I turned on the Lamp.");
    let received = received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].authorization.as_deref(),
        Some("Bearer token-123")
    );
    assert_eq!(
        received[0].body,
        serde_json::json!({ "action": "turn on", "device": "lamp" })
    );
}

#[tokio::test]
async fn should_turn_off_with_explicit_http_scheme() {
    let (host, port, received) = fake_hass(StatusCode::OK).await;
    let hostname = format!("http://{host}");
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", hostname.as_str()),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_off("Turn off the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::TurnedOffDevice);
    assert_eq!(
        received.lock().unwrap()[0].body,
        serde_json::json!({ "action": "turn off", "device": "lamp" })
    );
}

#[tokio::test]
async fn should_wait_for_slow_home_assistant() {
    let (host, port, received) = slow_hass(StatusCode::OK, Duration::from_secs(11)).await;
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", host.as_str()),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_on("Turn on the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::TurnedOnDevice);
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_status_when_home_assistant_rejects() {
    let (host, port, received) = fake_hass(StatusCode::SERVICE_UNAVAILABLE).await;
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", host.as_str()),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_on("Turn on the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::ConnectionFailed);
    assert!(outcome.speech.contains("503"));
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_report_transport_error_when_nothing_listens() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port().to_string();
    drop(listener);
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", "127.0.0.1"),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_on("Turn on the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::TransportError);
    assert!(outcome.speech.starts_with("I could not reach Home Assistant"));
}

#[tokio::test]
async fn should_not_contact_server_without_api_key() {
    let (host, port, received) = fake_hass(StatusCode::OK).await;
    let service = service(&[("hostname", host.as_str()), ("port", port.as_str())]);

    let outcome = service.power_on("Turn on the Lamp", &lamp()).await;

    assert_eq!(outcome.code, OutcomeCode::KeyNotProvided);
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_not_contact_server_without_device() {
    let (host, port, received) = fake_hass(StatusCode::OK).await;
    let service = service(&[
        ("apikey", "token-123"),
        ("hostname", host.as_str()),
        ("port", port.as_str()),
    ]);

    let outcome = service.power_off("Turn it off", &[]).await;

    assert_eq!(outcome.code, OutcomeCode::DeviceNotProvided);
    assert!(received.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Connectivity probe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_probe_home_assistant_root() {
    let (host, port, _) = fake_hass(StatusCode::OK).await;
    let service = service(&[("hostname", host.as_str()), ("port", port.as_str())]);

    assert_eq!(service.check_hass_connection().await.unwrap(), 200);
    assert_eq!(
        service.check_connection().await.code,
        OutcomeCode::ConnectionSucceeded
    );
}

#[tokio::test]
async fn should_return_probe_status_verbatim() {
    let (host, port, _) = fake_hass(StatusCode::UNAUTHORIZED).await;
    let service = service(&[("hostname", host.as_str()), ("port", port.as_str())]);

    assert_eq!(service.check_hass_connection().await.unwrap(), 401);
}
