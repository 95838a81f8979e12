//! HTTP client tests.
//!
//! Requests go to a one-shot server on a local socket that records the raw
//! request and answers with a canned status and body.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use super::*;
use crate::domain::Category;
use crate::error::FailureCause;

struct StubServer {
    config: ApiConfig,
    handle: JoinHandle<String>,
}

impl StubServer {
    /// Serve exactly one request
    fn respond(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);

            let mut response = format!("HTTP/1.1 {} Stub\r\nConnection: close\r\n", status);
            if status != 204 {
                response.push_str(&format!(
                    "Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                    body.len(),
                    body
                ));
            } else {
                response.push_str("\r\n");
            }
            stream.write_all(response.as_bytes()).expect("write response");
            request
        });

        Self {
            config: ApiConfig::new(format!("http://{}", addr)),
            handle,
        }
    }

    fn api(&self) -> HttpPlacesApi {
        local_api(self.config.clone())
    }

    fn received(self) -> CapturedRequest {
        CapturedRequest::parse(&self.handle.join().expect("stub thread"))
    }
}

/// Client that never routes through an environment proxy
fn local_api(config: ApiConfig) -> HttpPlacesApi {
    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build client");
    HttpPlacesApi::with_client(config, client)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8(raw).expect("utf-8 request")
}

struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn parse(raw: &str) -> Self {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap_or((raw, ""));
        let mut lines = head.lines();
        let request_line = lines.next().unwrap_or_default().to_string();
        let headers = lines
            .filter_map(|line| line.split_once(':'))
            .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
            .collect();
        Self {
            request_line,
            headers,
            body: body.to_string(),
        }
    }

    fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

fn draft() -> PlaceDraft {
    PlaceDraft {
        name: "B".to_string(),
        price: 2000,
        category: Category::Cafe,
        description: "d".to_string(),
        link: "https://place.map.kakao.com/1".to_string(),
        image: String::new(),
    }
}

// ========================
// Listing
// ========================

#[tokio::test]
async fn test_list_sends_get_places() {
    let server = StubServer::respond(
        200,
        r#"[{"id":1,"name":"A","price":1000,"category":"한식","description":"d","link":"l","image":"i"}]"#,
    );

    let places = server.api().list_places().await.expect("list");
    let request = server.received();

    assert_eq!(request.request_line, "GET /places HTTP/1.1");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].name, "A");
}

#[tokio::test]
async fn test_list_server_error_carries_status() {
    let server = StubServer::respond(500, r#"{"error":"boom"}"#);

    let err = server.api().list_places().await.unwrap_err();
    server.received();

    assert_eq!(err.operation, Operation::List);
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test]
async fn test_list_no_content_is_empty() {
    let server = StubServer::respond(204, "");

    let places = server.api().list_places().await.expect("list");
    server.received();

    assert!(places.is_empty());
}

#[tokio::test]
async fn test_list_object_body_is_empty() {
    let server = StubServer::respond(200, r#"{"places":[]}"#);

    assert!(server.api().list_places().await.expect("list").is_empty());
    server.received();
}

// ========================
// Create
// ========================

#[tokio::test]
async fn test_create_posts_place_with_client_id() {
    let server = StubServer::respond(201, r#"{"id":999}"#);

    let created = server.api().create_place(draft()).await.expect("create");
    let request = server.received();

    assert_eq!(request.request_line, "POST /places HTTP/1.1");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);

    let sent: Value = serde_json::from_str(&request.body).expect("json body");
    assert_eq!(sent["id"], serde_json::json!(created.id.0));
    assert_eq!(sent["name"], "B");
    assert_eq!(sent["price"], 2000);
    assert_eq!(sent["category"], "카페");
    assert_eq!(sent["image"], "");
    // the echoed id is ignored
    assert_ne!(created.id, PlaceId(999));
}

#[tokio::test]
async fn test_create_accepts_200() {
    let server = StubServer::respond(200, "{}");

    assert!(server.api().create_place(draft()).await.is_ok());
    server.received();
}

#[tokio::test]
async fn test_create_rejects_other_status() {
    let server = StubServer::respond(500, "{}");

    let err = server.api().create_place(draft()).await.unwrap_err();
    server.received();

    assert_eq!(err.operation, Operation::Create);
    assert_eq!(err.http_status(), Some(500));
    assert_eq!(err.to_string(), "POST 요청 실패: 500");
}

// ========================
// Delete
// ========================

#[tokio::test]
async fn test_delete_targets_place_path_and_tolerates_404() {
    let server = StubServer::respond(404, r#"{"error":"not found"}"#);

    server.api().delete_place(PlaceId(42)).await.expect("404 is success");
    let request = server.received();

    assert_eq!(request.request_line, "DELETE /places/42 HTTP/1.1");
    assert_eq!(request.header_values("content-type"), vec!["application/json"]);
}

#[tokio::test]
async fn test_delete_no_content() {
    let server = StubServer::respond(204, "");

    assert!(server.api().delete_place(PlaceId(1)).await.is_ok());
    server.received();
}

#[tokio::test]
async fn test_delete_server_error() {
    let server = StubServer::respond(500, "{}");

    let err = server.api().delete_place(PlaceId(1)).await.unwrap_err();
    server.received();

    assert_eq!(err.operation, Operation::Delete);
    assert_eq!(err.http_status(), Some(500));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_failure() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("address")
    };
    let api = local_api(ApiConfig::new(format!("http://{}", addr)));

    let err = api.list_places().await.unwrap_err();

    assert!(matches!(err.cause, FailureCause::Transport(_)));
    assert_eq!(err.http_status(), None);
}

// ========================
// Body decoding
// ========================

#[test]
fn test_decode_single_entry() {
    let body = r#"[{"id":1,"name":"A","price":1000,"category":"한식","description":"d","link":"l","image":"i"}]"#;
    let places = decode_listing(body).unwrap();

    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id, PlaceId(1));
    assert_eq!(places[0].category, Category::Korean);
}

#[test]
fn test_non_array_body_is_empty() {
    assert!(decode_listing(r#"{"message":"ok"}"#).unwrap().is_empty());
    assert!(decode_listing("null").unwrap().is_empty());
    assert!(decode_listing("\"places\"").unwrap().is_empty());
}

#[test]
fn test_blank_body_is_empty() {
    assert!(decode_listing("").unwrap().is_empty());
    assert!(decode_listing(" \n").unwrap().is_empty());
}

#[test]
fn test_invalid_json_is_decode_failure() {
    let err = decode_listing("<html>").unwrap_err();
    assert_eq!(err.operation, Operation::List);
    assert!(matches!(err.cause, FailureCause::Decode(_)));
    assert_eq!(err.http_status(), None);
}

#[test]
fn test_malformed_element_is_decode_failure() {
    let err = decode_listing(r#"[{"id":"x"}]"#).unwrap_err();
    assert!(matches!(err.cause, FailureCause::Decode(_)));
}

#[test]
fn test_missing_display_fields_default_to_empty() {
    let places = decode_listing(r#"[{"id":3,"name":"C","price":500,"category":"분식"}]"#).unwrap();

    assert_eq!(places[0].description, "");
    assert!(!places[0].has_link());
    assert!(!places[0].has_image());
}
