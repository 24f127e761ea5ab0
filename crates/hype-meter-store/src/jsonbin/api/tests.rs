use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const ONE_REVIEW: &str = r#"{
    "record": {
        "reviews": [
            {"id": 2, "name": "Fan", "rating": 4, "review": "Hyped", "date": "Mar 1, 2026", "avatar": "a"}
        ]
    },
    "metadata": {"private": true}
}"#;

/// Accept a single connection, answer with a canned response and hand back the raw request.
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{}/v3/b/test", addr), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn local_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}

#[test]
fn test_latest_url_trims_trailing_slash() {
    assert_eq!(latest_url("https://example.com/b/1/"), "https://example.com/b/1/latest");
    assert_eq!(latest_url("https://example.com/b/1"), "https://example.com/b/1/latest");
}

#[test]
fn test_parse_record_reads_reviews() {
    let reviews = parse_record(ONE_REVIEW).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, 2);
    assert_eq!(reviews[0].name, "Fan");
}

#[test]
fn test_parse_record_empty_list() {
    let reviews = parse_record(r#"{"record": {"reviews": []}}"#).unwrap();
    assert!(reviews.is_empty());
}

#[test]
fn test_parse_record_skips_bad_entries() {
    let body = r#"{"record": {"reviews": [
        {"id": 3, "name": "A", "rating": 5, "review": "x", "date": "d", "avatar": "a"},
        {"id": 4, "name": "B", "rating": 9, "review": "x", "date": "d", "avatar": "a"},
        {"id": "five"},
        "not an object"
    ]}}"#;
    let reviews = parse_record(body).unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, 3);
}

#[test]
fn test_parse_record_malformed() {
    assert!(matches!(parse_record("not json"), Err(StoreError::Malformed(_))));
    assert!(matches!(parse_record(r#"{"reviews": []}"#), Err(StoreError::Malformed(_))));
    assert!(matches!(
        parse_record(r#"{"record": {"reviews": null}}"#),
        Err(StoreError::Malformed(_))
    ));
}

#[tokio::test]
async fn test_get_latest_sends_access_key() {
    let (endpoint, server) = serve_once("200 OK", ONE_REVIEW).await;
    let client = local_client();

    let reviews = get_latest(&client, &endpoint, "X-Master-Key", "secret").await.unwrap();
    assert_eq!(reviews.len(), 1);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /v3/b/test/latest "));
    assert!(request.to_lowercase().contains("x-master-key: secret"));
}

#[tokio::test]
async fn test_get_latest_non_success_status() {
    let (endpoint, server) = serve_once("401 Unauthorized", r#"{"message":"Invalid key"}"#).await;
    let client = local_client();

    let err = get_latest(&client, &endpoint, "X-Master-Key", "wrong").await.unwrap_err();
    match err {
        StoreError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid key"));
        }
        other => panic!("unexpected error: {}", other),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn test_put_document_writes_whole_list() {
    let (endpoint, server) = serve_once("200 OK", "{}").await;
    let client = local_client();
    let reviews = parse_record(ONE_REVIEW).unwrap();

    put_document(&client, &endpoint, "X-Master-Key", "secret", &reviews).await.unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /v3/b/test "));
    assert!(request.to_lowercase().contains("content-type: application/json"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let written: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(written["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(written["reviews"][0]["id"], 2);
}

#[tokio::test]
async fn test_put_document_connection_refused() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = local_client();
    let err = put_document(&client, &format!("http://{}/b", addr), "X-Master-Key", "k", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Http(_)));
}
