//! Integration tests for the HTTP transport against a mock gateway

use enot_client::{ApiError, ApiTransport, Method, PaymentClient, Transport};
use enot_core::{ApiConfig, ClientConfig, Params};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> ApiTransport {
    ApiTransport::new(&ApiConfig::default().with_host(server.uri())).unwrap()
}

#[tokio::test]
async fn test_send_decodes_json_object() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/request/balance"))
        .and(query_param("api_key", "key-1"))
        .and(query_param("email", "a@b.c"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new().with("api_key", "key-1").with("email", "a@b.c");
    let doc = transport_for(&server)
        .get("request/balance", &params)
        .await
        .unwrap();

    assert_eq!(doc.get_str("status"), Some("ok"));
}

#[tokio::test]
async fn test_send_flattens_nested_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/request/payoff-info"))
        .and(query_param("info[id]", "7"))
        .and(query_param("ids[1]", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let params = Params::new()
        .with("info", json!({"id": 7}))
        .with("ids", json!(["a", "b"]));
    let doc = transport_for(&server)
        .get("request/payoff-info", &params)
        .await
        .unwrap();

    assert!(doc.as_map().is_empty());
}

#[tokio::test]
async fn test_send_uses_requested_method() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/request/balance"))
        .and(query_param("api_key", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"balance": "1.00"})))
        .expect(1)
        .mount(&server)
        .await;

    let doc = transport_for(&server)
        .send("request/balance", &Params::new().with("api_key", "k"), Method::Post)
        .await
        .unwrap();

    assert_eq!(doc.get_str("balance"), Some("1.00"));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .get("request/balance", &Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_json_array_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["card", "qiwi"])))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .get("request/payment-methods", &Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedShape("array")), "got {err:?}");
}

#[tokio::test]
async fn test_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = transport_for(&server)
        .get("request/balance", &Params::new())
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_gateway_times_out_within_bound() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ok"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::default()
        .with_host(server.uri())
        .with_timeouts(200, 400);
    let transport = ApiTransport::new(&config).unwrap();

    let started = Instant::now();
    let err = transport
        .get("request/balance", &Params::new())
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "got {err:?}");
    assert!(started.elapsed() <= Duration::from_millis(400 + 250), "took {:?}", started.elapsed());
}

#[tokio::test]
async fn test_unreachable_host_fails_fast() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::default()
        .with_host(format!("http://{}", addr))
        .with_timeouts(200, 400);
    let transport = ApiTransport::new(&config).unwrap();

    let started = Instant::now();
    let err = transport
        .get("request/balance", &Params::new())
        .await
        .unwrap_err();

    assert!(err.is_connect() || err.is_timeout(), "got {err:?}");
    assert!(started.elapsed() <= Duration::from_millis(400 + 250), "took {:?}", started.elapsed());
}

#[tokio::test]
async fn test_transport_errors_do_not_expose_credentials() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::from_json_str(
        r#"{"merchantId": "shop1", "secretWord": "TOPSECRETWORD", "apiKey": "APIKEY123", "email": "a@b.c"}"#,
    )
    .unwrap();
    let api = ApiConfig::default()
        .with_host(format!("http://{}", addr))
        .with_timeouts(200, 400);
    let client = PaymentClient::with_api_config(config, &api).unwrap();

    let balance_err = client.get_balance().await.unwrap_err();
    let message = format!("{} {:?}", balance_err, balance_err);
    assert!(!message.contains("APIKEY123"), "leaked api key: {message}");
    assert!(!message.contains("a%40b.c"), "leaked email: {message}");

    let methods_err = client.get_available_payment_services().await.unwrap_err();
    let message = format!("{} {:?}", methods_err, methods_err);
    assert!(!message.contains("TOPSECRETWORD"), "leaked secret word: {message}");
}
