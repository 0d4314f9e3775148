//! End-to-end tests for the two-phase gateway.
//!
//! Each test spins up a stub backend on an ephemeral port, points a real
//! [`SapGateway`] at it, and drives the adapter through its public HTTP
//! surface. No network mocking; every exchange crosses a real socket.

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::routing::get;
use platform::credentials::BasicCredentials;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stock::application::config::GatewayConfig;
use stock::infra::sap::SapGateway;
use stock::stock_router;

/// Resource path the adapter must address on the backend
const BACKEND_PATH: &str = "/sap/bc/rest/zaws/stock";

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn test_credentials() -> BasicCredentials {
    BasicCredentials::new("tester", "secret")
}

fn adapter_config(backend: SocketAddr, token_timeout: Duration) -> GatewayConfig {
    GatewayConfig {
        host: backend.ip().to_string(),
        port: backend.port(),
        credentials: test_credentials(),
        token_timeout,
    }
}

/// Spawn the adapter wired to `backend` and return its address.
async fn spawn_adapter(backend: SocketAddr, token_timeout: Duration) -> SocketAddr {
    let gateway = SapGateway::new(adapter_config(backend, token_timeout));
    spawn(stock_router(gateway)).await
}

/// Stub GET handler minting a fixed token and session cookie.
async fn mint_token() -> (HeaderMap, &'static str) {
    let mut headers = HeaderMap::new();
    headers.insert("x-csrf-token", HeaderValue::from_static("abc123"));
    headers.append(
        header::SET_COOKIE,
        HeaderValue::from_static("sid=xyz; Path=/; HttpOnly"),
    );
    (headers, "")
}

/// Backend that counts every hit and never expects to be reached.
fn counting_backend(hits: Arc<AtomicUsize>) -> Router {
    let get_hits = Arc::clone(&hits);
    let post_hits = hits;
    Router::new().route(
        BACKEND_PATH,
        get(move || {
            let hits = Arc::clone(&get_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "ok"
            }
        })
        .post(move || {
            let hits = Arc::clone(&post_hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                "ok"
            }
        }),
    )
}

#[derive(Default)]
struct Recorded {
    token_fetch: Option<HeaderMap>,
    submit: Option<(HeaderMap, String)>,
}

/// Backend that records both phases and answers the submit with
/// `{"quantity": 42}`.
fn recording_backend(recorded: Arc<Mutex<Recorded>>) -> Router {
    let on_get = Arc::clone(&recorded);
    let on_post = recorded;
    Router::new().route(
        BACKEND_PATH,
        get(move |headers: HeaderMap| {
            let recorded = Arc::clone(&on_get);
            async move {
                recorded.lock().unwrap().token_fetch = Some(headers);
                mint_token().await
            }
        })
        .post(move |headers: HeaderMap, body: String| {
            let recorded = Arc::clone(&on_post);
            async move {
                recorded.lock().unwrap().submit = Some((headers, body));
                Json(json!({"quantity": 42}))
            }
        }),
    )
}

#[tokio::test]
async fn test_full_two_phase_exchange() {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let backend = spawn(recording_backend(Arc::clone(&recorded))).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"quantity": 42}));

    let recorded = recorded.lock().unwrap();
    let expected_auth = test_credentials().authorization_value();

    let token_fetch = recorded.token_fetch.as_ref().unwrap();
    assert_eq!(token_fetch.get(header::AUTHORIZATION).unwrap(), expected_auth.as_str());
    assert_eq!(token_fetch.get("x-csrf-token").unwrap(), "fetch");

    let (headers, body) = recorded.submit.as_ref().unwrap();
    assert_eq!(headers.get(header::AUTHORIZATION).unwrap(), expected_auth.as_str());
    assert_eq!(headers.get("x-csrf-token").unwrap(), "abc123");
    assert_eq!(headers.get(header::COOKIE).unwrap(), "sid=xyz");
    assert_eq!(headers.get(header::ACCEPT_LANGUAGE).unwrap(), "en");
    assert_eq!(headers.get("x-requested-with").unwrap(), "XMLHttpRequest");
    assert_eq!(headers.get(header::CONTENT_TYPE).unwrap(), "application/json");

    let payload: Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        payload,
        json!({"plant": "P100", "storage": "", "material": ""})
    );
}

#[tokio::test]
async fn test_multiple_cookies_joined_for_the_submit() {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let on_post = Arc::clone(&recorded);

    let backend = Router::new().route(
        BACKEND_PATH,
        get(|| async {
            let mut headers = HeaderMap::new();
            headers.insert("x-csrf-token", HeaderValue::from_static("abc123"));
            headers.append(
                header::SET_COOKIE,
                HeaderValue::from_static("sid=xyz; Path=/; Secure"),
            );
            headers.append(
                header::SET_COOKIE,
                HeaderValue::from_static("sap-usercontext=sap-client=100; Path=/"),
            );
            (headers, "")
        })
        .post(move |headers: HeaderMap, body: String| {
            let recorded = Arc::clone(&on_post);
            async move {
                recorded.lock().unwrap().submit = Some((headers, body));
                Json(json!({}))
            }
        }),
    );
    let backend = spawn(backend).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let recorded = recorded.lock().unwrap();
    let (headers, _) = recorded.submit.as_ref().unwrap();
    assert_eq!(
        headers.get(header::COOKIE).unwrap(),
        "sid=xyz; sap-usercontext=sap-client=100"
    );
}

#[tokio::test]
async fn test_missing_plant_never_reaches_the_backend() {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend = spawn(counting_backend(Arc::clone(&hits))).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    for url in [
        format!("http://{adapter}/stock"),
        format!("http://{adapter}/stock?plant="),
        format!("http://{adapter}/stock?storage=S1&material=M42"),
    ] {
        let response = reqwest::get(url).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = response.text().await.unwrap();
        assert_eq!(body, "Parameter 'plant' has not been provided");
    }

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_token_timeout_maps_to_unreachable() {
    let posts = Arc::new(AtomicUsize::new(0));
    let on_post = Arc::clone(&posts);

    let backend = Router::new().route(
        BACKEND_PATH,
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            "too late"
        })
        .post(move || {
            let posts = Arc::clone(&on_post);
            async move {
                posts.fetch_add(1, Ordering::SeqCst);
                "ok"
            }
        }),
    );
    let backend = spawn(backend).await;
    let adapter = spawn_adapter(backend, Duration::from_millis(50)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Server is unreachable");
    assert_eq!(posts.load(Ordering::SeqCst), 0, "submit must not run after a token timeout");
}

#[tokio::test]
async fn test_backend_rejection_maps_to_internal_error() {
    for status in [
        StatusCode::CREATED,
        StatusCode::FORBIDDEN,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let backend = Router::new().route(
            BACKEND_PATH,
            get(mint_token).post(move || async move { (status, "verbose backend diagnostics") }),
        );
        let backend = spawn(backend).await;
        let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

        let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = response.text().await.unwrap();
        assert_eq!(body, "Internal error", "status {status} must collapse to the fixed message");
        assert!(!body.contains("diagnostics"));
    }
}

#[tokio::test]
async fn test_malformed_backend_body_maps_to_decode() {
    let backend = Router::new().route(
        BACKEND_PATH,
        get(mint_token).post(|| async { "this is not json" }),
    );
    let backend = spawn(backend).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Malformed backend response");
}

#[tokio::test]
async fn test_submit_payload_round_trips_through_an_echoing_backend() {
    let backend = Router::new().route(
        BACKEND_PATH,
        get(mint_token).post(|body: String| async move {
            ([(header::CONTENT_TYPE, "application/json")], body)
        }),
    );
    let backend = spawn(backend).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!(
        "http://{adapter}/stock?plant=P100&storage=S1&material=M42"
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"plant": "P100", "storage": "S1", "material": "M42"})
    );
}

#[tokio::test]
async fn test_non_get_methods_are_rejected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let backend = spawn(counting_backend(Arc::clone(&hits))).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;
    let client = reqwest::Client::new();
    let url = format!("http://{adapter}/stock?plant=P100");

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let response = client
            .request(method.clone(), &url)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.text().await.unwrap(),
            format!("Unsupported method \"{method}\"")
        );
    }

    // HEAD answers without a body; only the envelope is visible.
    let response = client.head(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_connection_refused_maps_to_transport() {
    // Bind and immediately drop to get a port with no listener.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let adapter = spawn_adapter(dead, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.text().await.unwrap();
    assert!(!body.is_empty());
    assert_ne!(body, "Server is unreachable");
    assert_ne!(body, "Internal error");
}

#[tokio::test]
async fn test_token_fetch_accepts_any_status_and_missing_headers() {
    let recorded = Arc::new(Mutex::new(Recorded::default()));
    let on_post = Arc::clone(&recorded);

    let backend = Router::new().route(
        BACKEND_PATH,
        get(|| async { StatusCode::NOT_FOUND })
            .post(move |headers: HeaderMap, body: String| {
                let recorded = Arc::clone(&on_post);
                async move {
                    recorded.lock().unwrap().submit = Some((headers, body));
                    Json(json!({"quantity": 0}))
                }
            }),
    );
    let backend = spawn(backend).await;
    let adapter = spawn_adapter(backend, Duration::from_secs(5)).await;

    let response = reqwest::get(format!("http://{adapter}/stock?plant=P100"))
        .await
        .unwrap();

    // Phase 1 status is ignored; the exchange still completes.
    assert_eq!(response.status(), StatusCode::OK);

    let recorded = recorded.lock().unwrap();
    let (headers, _) = recorded.submit.as_ref().unwrap();
    assert_eq!(headers.get("x-csrf-token").unwrap(), "");
    assert_eq!(headers.get(header::COOKIE).unwrap(), "");
}
