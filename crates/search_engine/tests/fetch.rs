use std::time::Duration;

use pretty_assertions::assert_eq;
use search_engine::{ClientSettings, FailureKind, ReqwestSearchClient, SearchClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestSearchClient {
    ReqwestSearchClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn search_sends_query_and_parses_results() {
    let server = MockServer::start().await;
    let body = json!([{"shop": "A", "title": "Widget", "price": 100, "url": "http://x"}]);
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "iphone 15"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client_for(&server).search("iphone 15").await.expect("search ok");
    assert_eq!(value, body);
}

#[tokio::test]
async fn notice_bodies_pass_through_untouched() {
    let server = MockServer::start().await;
    let body = json!([{"type": "limit", "message": "Too many results"}]);
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let value = client_for(&server).search("ip").await.expect("search ok");
    assert_eq!(value, body);
}

#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).search("iphone").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.to_string(), "HTTP 500");
}

#[tokio::test]
async fn malformed_json_is_a_parse_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("iphone").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidJson);
    assert!(err.to_string().starts_with("invalid JSON: "));
}

#[tokio::test]
async fn object_body_is_returned_for_shape_check() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let value = client_for(&server).search("iphone").await.expect("search ok");
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3,4,5,6]"))
        .mount(&server)
        .await;

    let client = ReqwestSearchClient::new(ClientSettings {
        base_url: server.uri(),
        max_bytes: 4,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search("iphone").await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 4, .. }));
}

#[tokio::test]
async fn configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let client = ReqwestSearchClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search("iphone").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn unreachable_host_is_a_network_failure() {
    // A non-pooled server actually stops listening when dropped.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = ReqwestSearchClient::new(ClientSettings {
        base_url: uri,
        ..ClientSettings::default()
    })
    .expect("client");

    let err = client.search("iphone").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}
